use clap::Parser;
use std::path::PathBuf;

/// Start an HTTP service that plays the given video file in a browser,
/// reachable from phones and other LAN devices by scanning a terminal
/// QR code.
#[derive(Parser)]
#[command(name = "vidbeam")]
#[command(author, version, about = "Play a local video file in the browser over the LAN")]
pub struct Cli {
    /// Absolute or relative path of the video file to play
    pub file: Option<PathBuf>,

    /// Service port (range 1-65535)
    #[arg(short, long, default_value_t = vidbeam::config::DEFAULT_PORT)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["vidbeam", "movie.mp4"]);
        assert_eq!(cli.file, Some(PathBuf::from("movie.mp4")));
        assert_eq!(cli.port, 9090);
    }

    #[test]
    fn test_port_flag_short_and_long() {
        let cli = Cli::parse_from(["vidbeam", "-p", "8888", "movie.mp4"]);
        assert_eq!(cli.port, 8888);

        let cli = Cli::parse_from(["vidbeam", "--port", "7070", "/home/video.mp4"]);
        assert_eq!(cli.port, 7070);
    }

    #[test]
    fn test_file_is_optional() {
        let cli = Cli::parse_from(["vidbeam"]);
        assert!(cli.file.is_none());
    }
}
