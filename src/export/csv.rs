// CSV export - one row per profile, social stats joined in

use crate::dataset::Dataset;
use crate::entities::Profile;
use crate::errors::ExportError;
use serde::Serialize;
use std::io;

/// Column names follow the spreadsheet layout analysts expect
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "FullName")]
    full_name: &'a str,
    #[serde(rename = "FirstName")]
    first_name: &'a str,
    #[serde(rename = "LastName")]
    last_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Age")]
    age: i32,
    #[serde(rename = "Birthdate")]
    birthdate: &'a str,
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "JobTitle")]
    job_title: &'a str,
    #[serde(rename = "City")]
    city: &'a str,
    #[serde(rename = "University")]
    university: &'a str,
    #[serde(rename = "GraduationYear")]
    graduation_year: i32,
    #[serde(rename = "LinkedInConnections")]
    linkedin_connections: u32,
    #[serde(rename = "LinkedIn")]
    linkedin: &'a str,
    #[serde(rename = "Twitter")]
    twitter: &'a str,
    #[serde(rename = "GitHub")]
    github: &'a str,
    #[serde(rename = "PasswordHint")]
    password_hint: &'a str,
    #[serde(rename = "PasswordHash")]
    password_hash: &'a str,
    #[serde(rename = "ProfileURL")]
    url: &'a str,
    #[serde(rename = "Posts")]
    posts: u32,
    #[serde(rename = "Followers")]
    followers: u32,
    #[serde(rename = "Following")]
    following: u32,
    #[serde(rename = "LastActive")]
    last_active: &'a str,
    #[serde(rename = "GeneratedAt")]
    generated_at: &'a str,
}

impl<'a> CsvRow<'a> {
    fn new(profile: &'a Profile, dataset: &'a Dataset) -> Self {
        let social = dataset.social_for(profile);

        CsvRow {
            id: &profile.id,
            full_name: &profile.full_name,
            first_name: &profile.first_name,
            last_name: &profile.last_name,
            email: &profile.email,
            phone: &profile.phone,
            age: profile.age,
            birthdate: &profile.birthdate,
            company: &profile.company,
            job_title: &profile.job_title,
            city: &profile.city,
            university: &profile.university,
            graduation_year: profile.graduation_year,
            linkedin_connections: profile.linkedin_connections,
            linkedin: &profile.social_profiles.linkedin,
            twitter: &profile.social_profiles.twitter,
            github: profile.social_profiles.github.as_deref().unwrap_or(""),
            password_hint: &profile.password_hint,
            password_hash: &profile.password_hash,
            url: &profile.url,
            posts: social.map(|s| s.posts).unwrap_or(0),
            followers: social.map(|s| s.followers).unwrap_or(0),
            following: social.map(|s| s.following).unwrap_or(0),
            last_active: social.map(|s| s.last_active.as_str()).unwrap_or(""),
            generated_at: &profile.generated_at,
        }
    }
}

pub fn render_csv(dataset: &Dataset) -> Result<String, ExportError> {
    let mut wtr = ::csv::Writer::from_writer(Vec::new());

    if dataset.profiles.is_empty() {
        // serialize() only emits the header alongside the first row
        wtr.write_record(HEADERS)?;
    }
    for profile in &dataset.profiles {
        wtr.serialize(CsvRow::new(profile, dataset))?;
    }

    let bytes = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub const HEADERS: [&str; 25] = [
    "ID", "FullName", "FirstName", "LastName", "Email", "Phone", "Age", "Birthdate",
    "Company", "JobTitle", "City", "University", "GraduationYear", "LinkedInConnections",
    "LinkedIn", "Twitter", "GitHub", "PasswordHint", "PasswordHash", "ProfileURL",
    "Posts", "Followers", "Following", "LastActive", "GeneratedAt",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_dataset;

    #[test]
    fn test_csv_header_and_rows() {
        let dataset = sample_dataset(false);
        let text = render_csv(&dataset).unwrap();

        let mut rdr = ::csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADERS.to_vec());

        let rows: Vec<::csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Alice Smith");
        assert_eq!(&rows[0][20], "12");
        assert_eq!(&rows[0][16], "");
        // Bob has no social stats
        assert_eq!(&rows[1][20], "0");
        assert_eq!(&rows[1][23], "");
        assert_eq!(&rows[1][16], "https://github.com/boblee");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let mut dataset = sample_dataset(false);
        dataset.profiles[0].company = "Acme, Inc.".into();
        let text = render_csv(&dataset).unwrap();
        assert!(text.contains("\"Acme, Inc.\""));
    }

    #[test]
    fn test_csv_empty_dataset_has_header_only() {
        let text = render_csv(&Dataset::default()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("ID,FullName,"));
    }
}
