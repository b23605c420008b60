
pub(super) const HUMAN: &str = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "http://www.example.com/" "Mozilla/5.0 (Windows NT 10.0) Chrome/118.0""#;
pub(super) const GOOGLEBOT: &str = r#"66.249.66.1 - - [10/Oct/2023:13:55:37 +0000] "GET /robots.txt HTTP/1.1" 200 68 "-" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#;
