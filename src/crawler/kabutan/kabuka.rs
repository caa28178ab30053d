use anyhow::{anyhow, Result};
use async_trait::async_trait;
use concat_string::concat_string;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::{
    crawler::{
        kabutan::{Kabutan, HOST},
        QuotePage,
    },
    declare::{QuoteEnvelope, StockQuote, TableGrid, NOT_AVAILABLE},
    logging,
    util::{self, http::element, text},
};

/// 股價頁的標題格式，例如「7203 トヨタ自動車」，第一段數字是股票代碼
static REG_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+(.+)").expect("Failed to compile title regex"));

/// 表格儲存格，th 與 td 一視同仁，依文件順序取出
static SELECTOR_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("Failed to parse cell selector"));

/// 公司圖片所在的容器
const IMAGE_SELECTOR: &str = "div#chc_3_1.ch_sz1 img";

/// 股價日 K 表的 CSS 類別（第一列為表頭，需跳過）
const PRICE_TABLE_CLASS: &str = "stock_kabuka0";

/// 日/週/月摘要表的 CSS 類別（所有列都要保留）
const DWM_TABLE_CLASS: &str = "stock_kabuka_dwm";

/// 股價頁網址，stock_symbol 不做驗證與跳脫，直接帶入
fn kabuka_url(stock_symbol: &str) -> String {
    concat_string!("https://", HOST, "/stock/kabuka?code=", stock_symbol)
}

/// 從第一個 h2 標題解析出（股票代碼, 公司名稱）。
///
/// 標題缺漏或格式不符時兩個欄位都回傳「N/A」，這不算解析失敗。
fn parse_title(document: &Html) -> (String, String) {
    let root = document.root_element();

    if let Some(title) = element::parse_value(&root, "h2") {
        if let Some(captures) = REG_TITLE.captures(title.trim()) {
            if let (Some(symbol), Some(name)) = (captures.get(1), captures.get(2)) {
                return (symbol.as_str().to_string(), name.as_str().to_string());
            }
        }
    }

    (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
}

/// 解析公司圖片網址，找不到圖片或 src 是空字串時回傳「N/A」。
fn parse_company_image(document: &Html) -> String {
    let root = document.root_element();

    element::parse_attr(&root, IMAGE_SELECTOR, "src")
        .map(|src| src.trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 通用表格解析：取出指定類別容器內的所有列，
/// 每列收集全部儲存格（th 或 td）並清理文字，列與儲存格都維持文件順序。
///
/// # Arguments
///
/// * `table_class`: 表格容器的 CSS 類別名稱。
/// * `skip_header`: 是否跳過第一列（表頭列）。
fn parse_table(document: &Html, table_class: &str, skip_header: bool) -> Result<TableGrid> {
    let selector = Selector::parse(&format!(".{} tr", table_class))
        .map_err(|why| anyhow!("Failed to parse tr selector because {:?}", why))?;
    let skip = usize::from(skip_header);

    let grid = document
        .select(&selector)
        .skip(skip)
        .map(|row| {
            row.select(&SELECTOR_CELL)
                .map(|cell| text::clean_cell(&cell.text().collect::<String>()))
                .collect::<Vec<String>>()
        })
        .collect();

    Ok(grid)
}

/// 將股價頁的 HTML 解析成 `StockQuote`。
///
/// 四條解析規則彼此獨立，任何一條出錯整個解析就算失敗，不回傳部分結果；
/// 標題與圖片解析到「N/A」是合法結果而非錯誤。
pub(crate) fn extract(text: &str) -> Result<StockQuote> {
    let document = Html::parse_document(text);

    let (symbol, company_name) = parse_title(&document);
    let company_image = parse_company_image(&document);
    let price_chart_data = parse_table(&document, PRICE_TABLE_CLASS, true)?;
    let dwm_table_data = parse_table(&document, DWM_TABLE_CLASS, false)?;

    Ok(StockQuote {
        company_name,
        company_image,
        symbol,
        data: price_chart_data,
        info: dwm_table_data,
    })
}

/// 抓取指定股票的株価頁並回傳統一的信封。
///
/// 抓取失敗時 msg 固定為日文的失敗訊息，解析失敗時 msg 會帶出失敗原因，
/// 兩者的 code 都是 -1、data 都是空物件。
pub async fn visit(stock_symbol: &str) -> QuoteEnvelope {
    let url = kabuka_url(stock_symbol);

    let text = match util::http::get(&url, None).await {
        Ok(text) => text,
        Err(why) => {
            logging::error_file_async(format!("Failed to fetch {} because {:?}", url, why));
            return QuoteEnvelope::failure("リクエストに失敗しました。".to_string());
        }
    };

    match extract(&text) {
        Ok(quote) => QuoteEnvelope::success(quote),
        Err(why) => {
            logging::error_file_async(format!("Failed to extract from {} because {:?}", url, why));
            QuoteEnvelope::failure(format!("解析失败: {}", why))
        }
    }
}

#[async_trait]
impl QuotePage for Kabutan {
    async fn get_quote(stock_symbol: &str) -> QuoteEnvelope {
        visit(stock_symbol).await
    }
}
