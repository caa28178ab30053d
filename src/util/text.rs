/// 清理表格儲存格的文字：先移除所有半形空白與換行字元，再修剪前後空白。
///
/// 這是唯一的文字正規化，不做大小寫轉換也不做數值解析，
/// 兩張表格的儲存格都必須套用同一個清理流程。
pub fn clean_cell(text: &str) -> String {
    text.replace(' ', "").replace('\n', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    // 注意這個慣用法：在 tests 模組中，從外部範疇匯入所有名字。
    use super::*;

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell(" 1,234.5 \n"), "1,234.5");
        assert_eq!(clean_cell("25/08/22\n"), "25/08/22");
        assert_eq!(clean_cell("ト ヨ タ\n自動車"), "トヨタ自動車");
        assert_eq!(clean_cell(""), "");
        assert_eq!(clean_cell(" \n \n "), "");
    }

    #[test]
    fn test_clean_cell_keeps_tabs_only_in_the_middle() {
        // 只移除空白與換行，位於中間的 tab 會留下，前後的 tab 被 trim 掉
        assert_eq!(clean_cell("\ta\tb\t"), "a\tb");
    }

    #[test]
    fn test_clean_cell_idempotent() {
        let samples = [
            " 1,234.5 \n",
            "トヨタ 自動車",
            "\n\n  mixed \t content  \n",
            "",
            "already-clean",
        ];

        for sample in samples {
            let once = clean_cell(sample);
            assert_eq!(clean_cell(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_clean_cell_removes_all_spaces_and_newlines() {
        let cleaned = clean_cell("  a b\nc d \n e ");

        assert!(!cleaned.contains(' '));
        assert!(!cleaned.contains('\n'));
        assert_eq!(cleaned, "abcde");
    }
}
