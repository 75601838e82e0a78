use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// 表示用の月略称（フランス語、先頭3文字を大文字始まりにしたもの）
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// ISO形式（YYYY-MM-DD）の日付文字列を解析する
///
/// # 引数
/// * `date_str` - 日付文字列
///
/// # 戻り値
/// 解析済みの日付、または形式が不正な場合はバリデーションエラー
pub fn parse_iso_date(date_str: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::validation(format!("無効な日付です: {date_str} ({e})")))
}

/// 日付を一覧表示用の形式に変換する
///
/// "2004-04-04" は "4 Avr. 04" になる（日は0埋めなし、年は下2桁）
pub fn format_date(date_str: &str) -> AppResult<String> {
    let date = parse_iso_date(date_str)?;
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!(
        "{} {month}. {:02}",
        date.day(),
        date.year().rem_euclid(100)
    ))
}

/// 必須フィールドのバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `field_name` - フィールド名（エラーメッセージ用）
pub fn validate_required_field(text: &str, field_name: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation(format!("{field_name}は必須項目です")));
    }
    Ok(())
}

/// フォーム入力を整数として解析する
///
/// 小数が入力された場合は小数部を切り捨てる
pub fn parse_integer_field(text: &str, field_name: &str) -> AppResult<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(AppError::validation(format!(
            "{field_name}は数値で入力してください"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2022-12-25").unwrap(), "25 Déc. 22");
        assert_eq!(format_date("1999-08-15").unwrap(), "15 Aoû. 99");
    }

    #[test]
    fn test_format_date_rejects_malformed_input() {
        assert!(format_date("").is_err());
        assert!(format_date("2004-13-01").is_err());
        assert!(format_date("04/04/2004").is_err());
        assert!(matches!(
            format_date("not a date"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_required_field() {
        assert!(validate_required_field("400", "montant").is_ok());
        assert!(validate_required_field("", "montant").is_err());
        assert!(validate_required_field("   ", "montant").is_err());
    }

    #[test]
    fn test_parse_integer_field() {
        assert_eq!(parse_integer_field("400", "amount").unwrap(), 400);
        assert_eq!(parse_integer_field(" 25 ", "pct").unwrap(), 25);
        assert_eq!(parse_integer_field("12.9", "amount").unwrap(), 12);
        assert!(parse_integer_field("abc", "amount").is_err());
        assert!(parse_integer_field("inf", "amount").is_err());
    }
}
