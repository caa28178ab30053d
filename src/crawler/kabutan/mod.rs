//! # 株探（kabutan.jp）採集模組
//!
//! 此模組負責從株探抓取日本個股的股價頁資料。
//!
//! ## 支援的功能
//!
//! - **株価頁 (`kabuka`)**：公司名稱與代碼、公司圖片、日 K 表、日/週/月摘要表。
//!
//! ## 站點資訊
//!
//! - 來源域名：`kabutan.jp`
//! - 抓取技術：HTTP GET 搭配 CSS Selector 解析。

/// 株価頁採集子模組
pub mod kabuka;

pub(super) const HOST: &str = "kabutan.jp";

/// 株探 kabutan.jp
pub struct Kabutan {}
