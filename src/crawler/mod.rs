use async_trait::async_trait;

use crate::declare::QuoteEnvelope;

/// 株探 kabutan.jp
pub mod kabutan;

#[async_trait]
pub trait QuotePage {
    /// 取得指定股票的股價頁並解析成統一的回應信封，
    /// 抓取或解析失敗時回傳失敗信封而不是錯誤
    async fn get_quote(stock_symbol: &str) -> QuoteEnvelope;
}
