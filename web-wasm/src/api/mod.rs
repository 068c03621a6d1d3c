//! ブラウザ通信

pub mod epic;
