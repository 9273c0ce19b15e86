//! ページ URL からドメインキー（ホスト名）を取り出す

/// URL が解釈できないときに返す番兵ドメイン
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// URL のホスト名を返す。パス・クエリの差はキーに影響しない。
///
/// 解釈できない URL やホストを持たない URL（`mailto:` 等）は呼び出し元を
/// 失敗させず [`UNKNOWN_DOMAIN`] に落とす。
pub fn extract_domain(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => UNKNOWN_DOMAIN.to_string(),
        },
        Err(_) => UNKNOWN_DOMAIN.to_string(),
    }
}
