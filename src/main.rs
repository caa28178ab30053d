pub mod config;
pub mod crawler;
pub mod declare;
pub mod logging;
pub mod util;

use std::io::{self, Write};

use anyhow::Result;

use crate::crawler::{kabutan::Kabutan, QuotePage};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    print!("株式コードを入力してください: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().read_line(&mut code)?;
    let code = code.trim();

    logging::info_file_async(format!("fetch kabuka page for {}", code));

    let envelope = Kabutan::get_quote(code).await;

    // serde_json 預設不跳脫非 ASCII 字元，日文訊息會原樣輸出
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
