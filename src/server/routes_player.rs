//! Player page route.

use axum::{extract::State, response::Html};

use crate::server::AppContext;

/// Render the HTML player page for the configured media file.
pub async fn player_page(State(ctx): State<AppContext>) -> Html<String> {
    Html(render_player(ctx.config.media_name()))
}

/// HTML5 document titled after the file, with a player element sourcing
/// the streaming route.
fn render_player(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} - Video Player</title>
    <style>
        body {{
            margin: 0;
            padding: 20px;
            background-color: #f0f0f0;
            display: flex;
            flex-direction: column;
            align-items: center;
            font-family: Arial, sans-serif;
        }}
        h1 {{
            color: #333;
            margin-bottom: 20px;
        }}
        video {{
            width: 90%;
            max-width: 1200px;
            height: auto;
            border-radius: 8px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <video controls autoplay preload="metadata">
        <source src="/video" type="video/mp4">
        Your browser does not support HTML5 video playback. Please upgrade your browser.
    </video>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_page_titled_after_file() {
        let html = render_player("movie.mp4");
        assert!(html.contains("<title>movie.mp4 - Video Player</title>"));
        assert!(html.contains("<h1>movie.mp4</h1>"));
    }

    #[test]
    fn test_player_sources_stream_route() {
        let html = render_player("movie.mp4");
        assert!(html.contains(r#"<source src="/video" type="video/mp4">"#));
        assert!(html.contains("<video controls autoplay"));
    }
}
