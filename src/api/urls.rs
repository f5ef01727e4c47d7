//! Preview URL constructors.
//!
//! Three ways to look at a rendered file before downloading it: the file as
//! served directly by the service, the service's inline preview endpoint
//! (token passed as a query parameter, since the viewer cannot send
//! headers), and a third-party document viewer wrapping that endpoint.

/// Office web viewer used for the third-party preview.
pub const OFFICE_VIEWER_URL: &str = "https://view.officeapps.live.com/op/embed.aspx";

/// URL of the file as the service serves it.
pub fn direct_url(base_url: &str, filepath: &str) -> String {
    let path = filepath
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// URL of the service's inline preview endpoint.
pub fn preview_url(base_url: &str, filepath: &str, token: &str) -> String {
    format!(
        "{}/chatbot/preview/{}?token={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(filepath),
        urlencoding::encode(token)
    )
}

/// URL of the third-party viewer showing the inline preview.
pub fn viewer_url(base_url: &str, filepath: &str, token: &str) -> String {
    format!(
        "{}?src={}",
        OFFICE_VIEWER_URL,
        urlencoding::encode(&preview_url(base_url, filepath, token))
    )
}
