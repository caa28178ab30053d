use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// 表格資料的統一形狀：依照網頁出現順序排列的列，每列是清理過的儲存格文字
pub type TableGrid = Vec<Vec<String>>;

/// 當標題或圖片等欄位在頁面上找不到時使用的佔位字串，
/// 呼叫端會依字面值比對，不可改成 Option
pub const NOT_AVAILABLE: &str = "N/A";

/// 個股股價頁解析後的結果
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StockQuote {
    /// 公司名稱
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// 公司圖片網址
    #[serde(rename = "companyImage")]
    pub company_image: String,
    /// 股票代碼
    pub symbol: String,
    /// 股價日 K 表（stock_kabuka0，不含表頭列）
    pub data: TableGrid,
    /// 日/週/月摘要表（stock_kabuka_dwm，含表頭列）
    pub info: TableGrid,
}

/// 回傳給呼叫端的統一信封，成功與失敗都是 msg / code / data 三個欄位
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuoteEnvelope {
    pub msg: String,
    pub code: i32,
    pub data: Value,
}

impl QuoteEnvelope {
    /// 成功時 code 固定為 200，data 為序列化後的 StockQuote
    pub fn success(quote: StockQuote) -> Self {
        match serde_json::to_value(&quote) {
            Ok(data) => QuoteEnvelope {
                msg: "success".to_string(),
                code: 200,
                data,
            },
            Err(why) => QuoteEnvelope::failure(format!("解析失败: {}", why)),
        }
    }

    /// 失敗時 code 固定為 -1，data 固定為空物件
    pub fn failure(msg: String) -> Self {
        QuoteEnvelope {
            msg,
            code: -1,
            data: Value::Object(Default::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shape() {
        let envelope = QuoteEnvelope::failure("リクエストに失敗しました。".to_string());

        assert_eq!(envelope.code, -1);
        assert_eq!(envelope.msg, "リクエストに失敗しました。");
        assert_eq!(envelope.data, serde_json::json!({}));
    }

    #[test]
    fn test_success_shape() {
        let quote = StockQuote {
            company_name: "トヨタ自動車".to_string(),
            company_image: NOT_AVAILABLE.to_string(),
            symbol: "7203".to_string(),
            data: vec![vec!["A".to_string(), "B".to_string()]],
            info: vec![],
        };
        let envelope = QuoteEnvelope::success(quote);

        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.msg, "success");
        assert_eq!(envelope.data["companyName"], "トヨタ自動車");
        assert_eq!(envelope.data["companyImage"], "N/A");
        assert_eq!(envelope.data["symbol"], "7203");
        assert_eq!(envelope.data["data"][0][1], "B");
    }

    #[test]
    fn test_envelope_top_level_fields() {
        let envelope = QuoteEnvelope::failure("解析失败: test".to_string());
        let json = serde_json::to_value(&envelope).expect("Failed to serialize envelope");
        let object = json.as_object().expect("Envelope should be an object");

        assert_eq!(object.len(), 3);
        assert!(object.contains_key("msg"));
        assert!(object.contains_key("code"));
        assert!(object.contains_key("data"));
    }
}
