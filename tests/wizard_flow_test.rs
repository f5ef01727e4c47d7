//! End-to-end wizard runs against a mock service.

use std::sync::Arc;

use pptwizard::wizard::messages;
use pptwizard::{
    ApiClient, AuthState, ClientConfig, LayoutCustomizationPatch, MemoryTokenStore, PptWizard,
    PreviewMethod, PreviewSource, SlideRange, Step, Theme, Wizard,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PPTX: &[u8] = b"PK\x03\x04presentation";

fn wizard_for(server: &MockServer, token: Option<&str>) -> Wizard<ApiClient> {
    let store = match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::new(),
    };
    let api = ApiClient::with_token_store(
        ClientConfig::new().with_base_url(server.uri()),
        Arc::new(store),
    )
    .unwrap();
    Wizard::new(api)
}

async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/chatbot/generate-content"))
        .and(body_partial_json(json!({"topic": "Intro to Machine Learning"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": "# ML Basics\n- Supervised\n- Unsupervised"})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chatbot/create-ppt"))
        .and(body_json(json!({
            "content": "# ML Basics\n- Supervised\n- Unsupervised (v2)",
            "layout_customization": {
                "slide_range": "10-15",
                "visual_preference": "balanced",
                "theme": "madison"
            },
            "theme": "madison"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"output_file": "outputs/intro_to_ml.pptx"})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chatbot/download"))
        .and(body_json(json!({"filepath": "outputs/intro_to_ml.pptx"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PPTX.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_from_topic_to_saved_file() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;
    let out = tempfile::tempdir().unwrap();

    let mut wizard = wizard_for(&server, Some("tok"));
    assert_eq!(wizard.auth_state(), AuthState::Authenticated);

    wizard.set_topic("Intro to Machine Learning");
    wizard.generate_content().await.unwrap();
    assert_eq!(wizard.current_step(), Step::Review);
    assert_eq!(
        wizard.session().generated_content,
        "# ML Basics\n- Supervised\n- Unsupervised"
    );

    let edited = format!("{} (v2)", wizard.session().edited_content);
    wizard.edit_content(edited);
    wizard.continue_to_design().unwrap();
    assert_eq!(wizard.current_step(), Step::Design);

    wizard.customize_layout(
        LayoutCustomizationPatch::new()
            .theme(Theme::Madison)
            .slide_range(SlideRange::TenToFifteen),
    );
    wizard.create_presentation().await.unwrap();
    assert_eq!(wizard.current_step(), Step::Download);
    assert_eq!(wizard.session().output_file, "outputs/intro_to_ml.pptx");

    let saved = wizard.download(out.path()).await.unwrap();
    assert_eq!(
        saved.file_name().unwrap(),
        "intro_to_machine_learning_presentation.pptx"
    );
    assert_eq!(std::fs::read(&saved).unwrap(), PPTX);
    assert_eq!(wizard.current_step(), Step::Download);
    assert!(wizard.session().error.is_none());
    assert!(!wizard.session().is_loading);
}

#[tokio::test]
async fn test_builder_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/generate-content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "# Deck"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chatbot/create-ppt"))
        .and(body_partial_json(json!({"theme": "nature"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output_file": "outputs/d.pptx"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chatbot/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PPTX.to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("access_token");
    std::fs::write(&token_path, "tok\n").unwrap();

    let saved = PptWizard::new()
        .with_config(
            ClientConfig::new()
                .with_base_url(server.uri())
                .with_token_path(&token_path),
        )
        .with_theme(Theme::Nature)
        .run("Rust 101", dir.path())
        .await
        .unwrap();

    assert_eq!(saved, dir.path().join("rust_101_presentation.pptx"));
    assert!(saved.exists());
}

#[tokio::test]
async fn test_generation_failure_stays_on_topic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/generate-content"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut wizard = wizard_for(&server, Some("tok"));
    wizard.set_topic("Anything");

    assert!(wizard.generate_content().await.is_err());
    assert_eq!(wizard.current_step(), Step::Topic);
    assert_eq!(
        wizard.session().error.as_deref(),
        Some(messages::GENERATE_FAILED)
    );
    assert!(!wizard.session().is_loading);
    assert_eq!(wizard.auth_state(), AuthState::Authenticated);
}

#[tokio::test]
async fn test_expired_token_requires_login_and_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/generate-content"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chatbot/generate-content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "# Back"})))
        .mount(&server)
        .await;

    let mut wizard = wizard_for(&server, Some("stale"));
    wizard.set_topic("Kept topic");

    assert!(wizard.generate_content().await.is_err());
    assert_eq!(wizard.auth_state(), AuthState::ReauthRequired);
    assert_eq!(
        wizard.session().error.as_deref(),
        Some(messages::SESSION_EXPIRED)
    );
    assert_eq!(wizard.session().topic, "Kept topic");
    assert!(!wizard.session().is_loading);

    wizard.login("alice", "pw").await.unwrap();
    assert_eq!(wizard.auth_state(), AuthState::Authenticated);
    assert!(wizard.session().error.is_none());

    wizard.generate_content().await.unwrap();
    assert_eq!(wizard.session().edited_content, "# Back");
}

#[tokio::test]
async fn test_blob_preview_falls_back_to_viewer() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/chatbot/preview/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut wizard = wizard_for(&server, Some("tok"));
    wizard.set_topic("Intro to Machine Learning");
    wizard.generate_content().await.unwrap();
    let edited = format!("{} (v2)", wizard.session().edited_content);
    wizard.edit_content(edited);
    wizard.continue_to_design().unwrap();
    wizard.customize_layout(LayoutCustomizationPatch::new().theme(Theme::Madison));
    wizard.create_presentation().await.unwrap();

    let source = wizard.show_preview(PreviewMethod::Blob).await.unwrap();
    assert_eq!(source.method(), PreviewMethod::Viewer);
    assert!(source.url().contains("officeapps"));
    assert_eq!(wizard.live_preview_files(), 0);
}

#[tokio::test]
async fn test_blob_preview_writes_and_releases_local_file() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/chatbot/preview/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PPTX.to_vec()))
        .mount(&server)
        .await;

    let mut wizard = wizard_for(&server, Some("tok"));
    wizard.set_topic("Intro to Machine Learning");
    wizard.generate_content().await.unwrap();
    let edited = format!("{} (v2)", wizard.session().edited_content);
    wizard.edit_content(edited);
    wizard.continue_to_design().unwrap();
    wizard.customize_layout(LayoutCustomizationPatch::new().theme(Theme::Madison));
    wizard.create_presentation().await.unwrap();

    let local_path = match wizard.show_preview(PreviewMethod::Blob).await.unwrap() {
        PreviewSource::Local(local) => local.path().to_path_buf(),
        other => panic!("expected local preview, got {:?}", other),
    };
    assert_eq!(std::fs::read(&local_path).unwrap(), PPTX);
    assert_eq!(wizard.live_preview_files(), 1);

    wizard.show_preview(PreviewMethod::Direct).await.unwrap();
    assert!(!local_path.exists());
    assert_eq!(wizard.live_preview_files(), 0);
}
