use serde::Deserialize;
use serenity::async_trait;

use crate::error::AppError;
use crate::model::tags::TagOption;
use crate::wizard::flow::TagCatalog;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Columns recognized in the roles tab, matched on trimmed lowercase headers.
const NAME_HEADER: &str = "role name";
const TYPE_HEADER: &str = "role type";
const DESCRIPTION_HEADER: &str = "role description";

pub struct SheetsClient {
    http: reqwest::Client,
    token: String,
    spreadsheet_id: String,
    tab_name: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(token: String, spreadsheet_id: String, tab_name: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            spreadsheet_id,
            tab_name,
        }
    }

    /// Fetches a cell range from the configured tab as rows of strings.
    pub async fn values(&self, range: &str) -> Result<Vec<Vec<String>>, AppError> {
        let a1 = format!("'{}'!{}", self.tab_name.replace('\'', "''"), range);
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(&a1)
        );
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let range: ValueRange = response.json().await?;
        Ok(range.values)
    }

    /// All role names in the given category, for the subscription commands.
    pub async fn role_names(&self, role_type: &str) -> Result<Vec<String>, AppError> {
        let rows = self.values("A1:Z200").await?;
        Ok(parse_role_rows(&rows, role_type)
            .into_iter()
            .map(|option| option.name)
            .collect())
    }
}

#[async_trait]
impl TagCatalog for SheetsClient {
    async fn tag_options(&self, category: &str) -> Result<Vec<TagOption>, AppError> {
        let rows = self.values("A1:Z200").await?;
        Ok(parse_role_rows(&rows, category))
    }
}

/// Interprets the roles tab: the first row is a header locating the name,
/// type, and optional description columns; every later row with a non-empty
/// name and a matching type (case-insensitive) yields one option.
pub fn parse_role_rows(rows: &[Vec<String>], role_type: &str) -> Vec<TagOption> {
    let Some(header) = rows.first() else {
        return Vec::new();
    };

    let column = |wanted: &str| {
        header
            .iter()
            .position(|cell| cell.trim().to_lowercase() == wanted)
    };
    let (Some(name_col), Some(type_col)) = (column(NAME_HEADER), column(TYPE_HEADER)) else {
        return Vec::new();
    };
    let description_col = column(DESCRIPTION_HEADER);

    let wanted_type = role_type.trim().to_lowercase();
    let mut options = Vec::new();

    for row in &rows[1..] {
        let name = row.get(name_col).map(|c| c.trim()).unwrap_or_default();
        let row_type = row.get(type_col).map(|c| c.trim()).unwrap_or_default();
        if name.is_empty() || row_type.to_lowercase() != wanted_type {
            continue;
        }

        let description = description_col
            .and_then(|col| row.get(col))
            .map(|c| c.trim())
            .filter(|d| !d.is_empty());
        options.push(match description {
            Some(description) => TagOption::with_description(name, description),
            None => TagOption::new(name),
        });
    }

    options
}
