pub mod webview;
