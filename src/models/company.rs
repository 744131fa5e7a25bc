use crate::error::{RegistrationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// An uploaded company brochure held in memory until submission
#[derive(Clone, PartialEq, Eq)]
pub struct BrochureFile {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub contents: Vec<u8>,
}

impl BrochureFile {
    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        contents: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes: contents.len() as u64,
            contents,
        }
    }

    /// Read a brochure from disk, inferring its MIME type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RegistrationError::InvalidInput(format!(
                    "Brochure path has no file name: {}",
                    path.display()
                ))
            })?
            .to_string();

        let contents = tokio::fs::read(path).await?;
        let mime_type = mime_for_file_name(&file_name).to_string();

        Ok(Self::from_bytes(file_name, mime_type, contents))
    }

    /// Lower-cased extension including the leading dot, e.g. `.pdf`
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
    }
}

impl fmt::Debug for BrochureFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrochureFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

fn mime_for_file_name(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Step 2 data bag: company profile
///
/// The brochure itself never serializes; it travels next to the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub company_name: String,
    pub address_line: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub year_established: String,
    pub website: String,
    #[serde(skip)]
    pub brochure: Option<BrochureFile>,
    pub brochure_path: String,
}

impl CompanyInfo {
    /// Merge-patch: only fields present in `patch` are overwritten
    pub fn apply(&mut self, patch: CompanyInfoPatch) {
        let CompanyInfoPatch {
            company_name,
            address_line,
            city,
            region,
            country,
            year_established,
            website,
            brochure,
            brochure_path,
        } = patch;

        if let Some(value) = company_name {
            self.company_name = value;
        }
        if let Some(value) = address_line {
            self.address_line = value;
        }
        if let Some(value) = city {
            self.city = value;
        }
        if let Some(value) = region {
            self.region = value;
        }
        if let Some(value) = country {
            self.country = value;
        }
        if let Some(value) = year_established {
            self.year_established = value;
        }
        if let Some(value) = website {
            self.website = value;
        }
        if let Some(value) = brochure {
            self.brochure = value;
        }
        if let Some(value) = brochure_path {
            self.brochure_path = value;
        }
    }

    /// Copy of this bag with the binary brochure split off
    pub fn without_brochure(&self) -> (CompanyInfo, Option<BrochureFile>) {
        let mut body = self.clone();
        let brochure = body.brochure.take();
        (body, brochure)
    }
}

/// Partial update for [`CompanyInfo`]
///
/// `brochure: Some(None)` removes a previously attached file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfoPatch {
    pub company_name: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub year_established: Option<String>,
    pub website: Option<String>,
    #[serde(skip)]
    pub brochure: Option<Option<BrochureFile>>,
    pub brochure_path: Option<String>,
}
