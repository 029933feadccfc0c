//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: パイプラインの各段（入力・プロンプト・完了・出力・進捗表示）

pub mod inbound;
pub mod outbound;
