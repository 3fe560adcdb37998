//! JSON edition output.
//!
//! Files are organized by date with edition names:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```
//!
//! A second run in the same edition overwrites the earlier file.

use crate::error::OutputError;
use crate::models::FrontPage;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `front_page` to `{json_output_dir}/{date}/{time_of_day}.json`.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_frontpage(
    front_page: &FrontPage,
    json_output_dir: &str,
) -> Result<String, OutputError> {
    let json = serde_json::to_string_pretty(front_page)?;

    let full_json_dir = format!(
        "{}/{}",
        json_output_dir.trim_end_matches('/'),
        front_page.local_date
    );
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(source) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %source, "Failed to create JSON dir");
        return Err(OutputError::Io {
            path: full_json_dir,
            source,
        });
    }

    let output_json_filename = format!("{}/{}.json", full_json_dir, front_page.time_of_day);
    fs::write(&output_json_filename, json)
        .await
        .map_err(|source| OutputError::Io {
            path: output_json_filename.clone(),
            source,
        })?;
    info!(
        path = %output_json_filename,
        articles = front_page.articles.len(),
        "Wrote JSON edition"
    );

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleRecord, SentimentLabel};
    use tempfile::{NamedTempFile, tempdir};

    fn front_page() -> FrontPage {
        FrontPage {
            local_date: "2024-03-12".to_string(),
            time_of_day: "afternoon".to_string(),
            local_time: "14:02:11".to_string(),
            articles: vec![ArticleRecord {
                date: "12 mars 2024".to_string(),
                title: "Airbus gagne".to_string(),
                link: "https://investir.lesechos.fr/a/airbus".to_string(),
                raw_text: "Le titre Airbus progresse.".to_string(),
                summary: "le titre airbus progresse.".to_string(),
                sentiment_label: SentimentLabel::Positive,
                sentiment_explanation: "It is positive with a compound sentiment score of 0.3818."
                    .to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_write_frontpage_layout_and_content() {
        let dir = tempdir().unwrap();
        let dir_str = dir.path().display().to_string();

        let path = write_frontpage(&front_page(), &dir_str).await.unwrap();
        assert_eq!(path, format!("{dir_str}/2024-03-12/afternoon.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let back: FrontPage = serde_json::from_str(&text).unwrap();
        assert_eq!(back.time_of_day, "afternoon");
        assert_eq!(back.articles, front_page().articles);
        assert!(text.contains(r#""sentiment_label": "positive""#));
    }

    #[tokio::test]
    async fn test_write_frontpage_reports_unwritable_path() {
        let file = NamedTempFile::new().unwrap();

        let err = write_frontpage(&front_page(), &file.path().display().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
