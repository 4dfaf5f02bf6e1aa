// TXT export - human readable report

use crate::dataset::Dataset;
use chrono::{DateTime, Local};

pub fn render_txt(dataset: &Dataset, now: DateTime<Local>) -> String {
    let wide = "=".repeat(80);
    let narrow = "-".repeat(40);
    let mut out = String::new();

    out.push_str(&format!("{}\n", wide));
    out.push_str("OSINT TRAINING PROFILES - SYNTHETIC DATA\n");
    out.push_str(&format!("{}\n", wide));
    out.push_str(&format!("Generated: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("Total Profiles: {}\n", dataset.profiles.len()));
    out.push_str(&format!("Total Companies: {}\n", dataset.companies.len()));
    out.push_str(&format!("{}\n\n", wide));

    out.push_str("COMPANIES\n");
    out.push_str(&format!("{}\n", narrow));
    for company in &dataset.companies {
        out.push_str(&format!("Company: {}\n", company.name));
        out.push_str(&format!("Industry: {}\n", company.industry));
        out.push_str(&format!("Size: {}\n", company.size));
        out.push_str(&format!("Location: {}\n", company.location));
        out.push_str(&format!("Website: {}\n", company.website));
        out.push_str(&format!("ID: {}\n", company.id));
        out.push_str(&format!("{}\n", narrow));
    }

    out.push_str("\n\nPROFILES\n");
    out.push_str(&format!("{}\n", wide));

    for (i, p) in dataset.profiles.iter().enumerate() {
        out.push_str(&format!("\nPROFILE #{:03}\n", i + 1));
        out.push_str(&format!("{}\n", narrow));

        out.push_str(&format!("Name: {}\n", p.full_name));
        out.push_str(&format!("Age: {} years old\n", p.age));
        out.push_str(&format!("Birthday: {}\n", p.birthdate));
        out.push_str(&format!("City: {}\n", p.city));

        out.push_str(&format!("Email: {}\n", p.email));
        out.push_str(&format!("Phone: {}\n", p.phone));

        out.push_str(&format!("Job Title: {}\n", p.job_title));
        out.push_str(&format!("Company: {}\n", p.company));

        out.push_str(&format!("University: {}\n", p.university));
        out.push_str(&format!("Graduation Year: {}\n", p.graduation_year));

        out.push_str(&format!("LinkedIn: {}\n", p.social_profiles.linkedin));
        out.push_str(&format!("LinkedIn Connections: {}\n", p.linkedin_connections));
        out.push_str(&format!("Twitter: {}\n", p.social_profiles.twitter));
        if let Some(github) = &p.social_profiles.github {
            out.push_str(&format!("GitHub: {}\n", github));
        }

        out.push_str(&format!("Password Hint: {}\n", p.password_hint));
        out.push_str(&format!("Password Hash ({}): {}\n", p.hash_type.as_str(), p.password_hash));
        if let Some(salt) = &p.salt {
            out.push_str(&format!("Salt: {}\n", salt));
        }

        out.push_str(&format!("Profile ID: {}\n", p.id));
        out.push_str(&format!("Generated: {}\n", p.generated_at));
        out.push_str(&format!("Profile URL: {}\n", p.url));

        if let Some(social) = dataset.social_for(p) {
            out.push_str(&format!("Posts: {}\n", social.posts));
            out.push_str(&format!("Followers: {}\n", social.followers));
            out.push_str(&format!("Following: {}\n", social.following));
            out.push_str(&format!("Last Active: {}\n", social.last_active));
        }

        out.push_str(&format!("{}\n", narrow));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_dataset;
    use chrono::TimeZone;

    #[test]
    fn test_txt_report_sections() {
        let text = render_txt(&sample_dataset(false), Local::now());

        assert!(text.contains("OSINT TRAINING PROFILES - SYNTHETIC DATA"));
        assert!(text.contains("Total Profiles: 2"));
        assert!(text.contains("Company: TechCorp Solutions\nIndustry: Technology"));
        assert!(text.contains("PROFILE #001"));
        assert!(text.contains("PROFILE #002"));
        assert!(text.contains("Password Hint: AliceBoston42"));
        assert!(text.contains("Password Hash (SHA-512): "));
        assert!(text.contains("GitHub: https://github.com/boblee"));
        assert_eq!(text.matches("Followers: ").count(), 1);
        assert!(!text.contains("Salt: "));
    }

    #[test]
    fn test_txt_header_layout() {
        let now = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let text = render_txt(&sample_dataset(false), now);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "OSINT TRAINING PROFILES - SYNTHETIC DATA");
        assert_eq!(lines[3], "Generated: 2025-03-04 05:06:07");
        assert_eq!(lines[4], "Total Profiles: 2");
        assert_eq!(lines[5], "Total Companies: 1");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "COMPANIES");
        assert!(text.ends_with(&format!("{}\n", "-".repeat(40))));
        assert!(text.contains("\n\n\nPROFILES\n"));
    }

    #[test]
    fn test_txt_shows_salt_when_present() {
        let text = render_txt(&sample_dataset(true), Local::now());
        assert!(text.contains("Password Hash (SHA-512_SALTED): "));
        assert_eq!(text.matches("Salt: 0123456789abcdef").count(), 2);
    }
}
