// 🎲 Profile Synthesizer - builds records from independent pool draws
//
// All randomness flows through a single `Rng`, so a seeded synthesizer
// reproduces everything except wall-clock timestamps.

use crate::entities::{company_domain, Company, HashType, Profile, SocialLinks, SocialProfile};
use crate::hashing::{generate_salt, hash_password, hash_password_with_salt};
use crate::pools;
use chrono::{Datelike, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fallback password component when a profile has no company
const NO_COMPANY_WORD: &str = "work";

pub struct ProfileSynthesizer<R: Rng = StdRng> {
    rng: R,

    /// Year ages are computed against
    reference_year: i32,
}

impl ProfileSynthesizer<StdRng> {
    /// Synthesizer seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic synthesizer for reproducible datasets
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::new(),
        }
    }
}

impl Default for ProfileSynthesizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProfileSynthesizer<R> {
    pub fn with_rng(rng: R) -> Self {
        ProfileSynthesizer {
            rng,
            reference_year: Utc::now().year(),
        }
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    /// Shared random source, for callers that draw alongside the synthesizer
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ========================================================================
    // PRIMITIVES
    // ========================================================================

    fn pick(&mut self, pool: &[&str]) -> String {
        pool[self.rng.gen_range(0..pool.len())].to_string()
    }

    /// Draw an element from the company pool
    pub fn random_company_name(&mut self) -> String {
        self.pick(pools::COMPANIES)
    }

    /// `ID-<unix seconds>-<8 hex chars>`
    pub fn generate_id(&mut self) -> String {
        let uuid = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        let simple = uuid.simple().to_string();
        format!("ID-{}-{}", Utc::now().timestamp(), &simple[..8])
    }

    pub fn generate_phone_number(&mut self) -> String {
        format!(
            "+1-{}-{}-{}",
            self.rng.gen_range(200..=999),
            self.rng.gen_range(200..=999),
            self.rng.gen_range(1000..=9999)
        )
    }

    /// Company address with probability 0.7 when a company is known,
    /// otherwise a personal mailbox
    pub fn generate_email(&mut self, first_name: &str, last_name: &str, company: Option<&str>) -> String {
        let first = first_name.to_lowercase();
        let last = last_name.to_lowercase();
        let initial: String = first.chars().take(1).collect();

        let local = match self.rng.gen_range(0..4) {
            0 => format!("{}.{}", first, last),
            1 => format!("{}{}", first, last),
            2 => format!("{}{}", initial, last),
            _ => format!("{}{}", first, self.rng.gen_range(10..=99)),
        };

        let domain = match company {
            Some(name) if !name.is_empty() && self.rng.gen::<f64>() > 0.3 => company_domain(name),
            _ => self.pick(pools::EMAIL_DOMAINS),
        };

        format!("{}@{}", local, domain)
    }

    /// Two picks (repeats allowed) from the profile's own fields plus a 2-digit number
    pub fn generate_password_hint(
        &mut self,
        first_name: &str,
        last_name: &str,
        birth_year: i32,
        city: &str,
        company: &str,
    ) -> String {
        let company_word = company
            .split(' ')
            .next()
            .filter(|w| !w.is_empty())
            .unwrap_or(NO_COMPANY_WORD);

        let year = birth_year.to_string();
        let components = [first_name, last_name, year.as_str(), city, company_word];

        let a = components[self.rng.gen_range(0..components.len())];
        let b = components[self.rng.gen_range(0..components.len())];
        format!("{}{}{}", a, b, self.rng.gen_range(10..=99))
    }

    // ========================================================================
    // RECORDS
    // ========================================================================

    /// Build one person. `company` is the employer chosen by the caller;
    /// None draws one from the pool.
    pub fn generate_profile(&mut self, company: Option<&str>, use_salt: bool) -> Profile {
        let first_name = self.pick(pools::FIRST_NAMES);
        let last_name = self.pick(pools::LAST_NAMES);
        let birth_year = self.rng.gen_range(1970..=2000);
        let company = match company {
            Some(name) => name.to_string(),
            None => self.random_company_name(),
        };

        let id = self.generate_id();
        let email = self.generate_email(&first_name, &last_name, Some(&company));
        let phone = self.generate_phone_number();
        let birthdate = format!(
            "{}/{}/{}",
            self.rng.gen_range(1..=12),
            self.rng.gen_range(1..=28),
            birth_year
        );
        let job_title = self.pick(pools::JOB_TITLES);
        let city = self.pick(pools::CITIES);
        let university = self.pick(pools::UNIVERSITIES);
        let graduation_year = self.rng.gen_range(1990..=2020);

        let gender = if self.rng.gen::<f64>() > 0.5 { "men" } else { "women" };
        let profile_pic = format!(
            "https://randomuser.me/api/portraits/{}/{}.jpg",
            gender,
            self.rng.gen_range(1..=99)
        );
        let linkedin_connections = self.rng.gen_range(50..=500);

        let first_lower = first_name.to_lowercase();
        let last_lower = last_name.to_lowercase();
        let github = if self.rng.gen::<f64>() > 0.4 {
            Some(format!("https://github.com/{}{}", first_lower, last_lower))
        } else {
            None
        };
        let social_profiles = SocialLinks {
            linkedin: format!("https://linkedin.com/in/{}-{}", first_lower, last_lower),
            twitter: format!("https://twitter.com/{}{}", first_lower, last_lower),
            github,
        };

        let url = format!("/profiles/{}", self.generate_id());

        let password_hint =
            self.generate_password_hint(&first_name, &last_name, birth_year, &city, &company);

        let (password_hash, salt, hash_type) = if use_salt {
            let salt = generate_salt(&mut self.rng);
            let hash = hash_password_with_salt(&password_hint, &salt);
            (hash, Some(salt), HashType::Sha512Salted)
        } else {
            (hash_password(&password_hint), None, HashType::Sha512)
        };

        Profile {
            id,
            full_name: format!("{} {}", first_name, last_name),
            first_name,
            last_name,
            email,
            phone,
            birthdate,
            birth_year,
            age: self.reference_year - birth_year,
            job_title,
            company,
            city,
            university,
            graduation_year,
            profile_pic,
            linkedin_connections,
            social_profiles,
            generated_at: Utc::now().to_rfc3339(),
            url,
            password_hint,
            password_hash,
            salt,
            hash_type,
        }
    }

    pub fn generate_company(&mut self) -> Company {
        let name = self.random_company_name();
        let website = format!("https://{}", company_domain(&name));

        Company {
            id: self.generate_id(),
            industry: self.pick(pools::INDUSTRIES),
            size: self.pick(pools::COMPANY_SIZES),
            location: self.pick(pools::CITIES),
            website,
            name,
            employees: Vec::new(),
            departments: pools::DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
            generated_at: Utc::now().to_rfc3339(),
            url: format!("/companies/{}", self.generate_id()),
        }
    }

    pub fn generate_social_profile(&mut self, profile: &Profile) -> SocialProfile {
        let days = self.rng.gen_range(1..=30);
        SocialProfile {
            id: profile.id.clone(),
            person_id: profile.id.clone(),
            posts: self.rng.gen_range(10..=100),
            followers: self.rng.gen_range(50..=1000),
            following: self.rng.gen_range(30..=500),
            last_active: (Utc::now() - Duration::days(days)).to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fields that do not depend on the wall clock
    fn stable_fields(p: &Profile) -> (String, String, String, String, String, String, i32) {
        (
            p.first_name.clone(),
            p.last_name.clone(),
            p.email.clone(),
            p.phone.clone(),
            p.password_hint.clone(),
            p.password_hash.clone(),
            p.birth_year,
        )
    }

    #[test]
    fn test_seeded_synthesizer_is_reproducible() {
        let mut a = ProfileSynthesizer::seeded(42);
        let mut b = ProfileSynthesizer::seeded(42);

        for _ in 0..20 {
            let pa = a.generate_profile(None, false);
            let pb = b.generate_profile(None, false);
            assert_eq!(stable_fields(&pa), stable_fields(&pb));
            assert_eq!(pa.id[pa.id.len() - 8..], pb.id[pb.id.len() - 8..]);
        }
    }

    #[test]
    fn test_profile_field_ranges() {
        let mut synth = ProfileSynthesizer::seeded(7).with_reference_year(2025);

        for _ in 0..200 {
            let p = synth.generate_profile(None, false);
            assert!((1970..=2000).contains(&p.birth_year));
            assert_eq!(p.age, 2025 - p.birth_year);
            assert!((1990..=2020).contains(&p.graduation_year));
            assert!((50..=500).contains(&p.linkedin_connections));
            assert_eq!(p.full_name, format!("{} {}", p.first_name, p.last_name));
            assert!(p.birthdate.ends_with(&p.birth_year.to_string()));
            assert!(p.id.starts_with("ID-"));
            assert!(p.url.starts_with("/profiles/ID-"));
            assert!(p.phone.starts_with("+1-"));
            assert_eq!(p.phone.len(), "+1-AAA-BBB-CCCC".len());
            assert!(pools::COMPANIES.contains(&p.company.as_str()));
        }
    }

    #[test]
    fn test_email_uses_company_or_personal_domain() {
        let mut synth = ProfileSynthesizer::seeded(3);

        for _ in 0..100 {
            let p = synth.generate_profile(Some("Beta Networks"), false);
            let domain = p.email.split('@').nth(1).unwrap().to_string();
            assert!(
                domain == "betanetworks.com" || pools::EMAIL_DOMAINS.contains(&domain.as_str()),
                "unexpected domain {}",
                domain
            );
            assert_eq!(p.company, "Beta Networks");
        }
    }

    #[test]
    fn test_email_without_company_is_personal() {
        let mut synth = ProfileSynthesizer::seeded(11);
        for _ in 0..50 {
            let email = synth.generate_email("Mary", "Jones", None);
            let domain = email.split('@').nth(1).unwrap();
            assert!(pools::EMAIL_DOMAINS.contains(&domain));
            assert!(email.starts_with("mary") || email.starts_with("mjones"));
        }
    }

    #[test]
    fn test_password_hint_built_from_profile_fields() {
        let mut synth = ProfileSynthesizer::seeded(5);
        let parts = ["Alice", "Smith", "1990", "Boston", "TechCorp"];

        for _ in 0..100 {
            let hint = synth.generate_password_hint("Alice", "Smith", 1990, "Boston", "TechCorp Solutions");
            let (body, digits) = hint.split_at(hint.len() - 2);
            let n: u32 = digits.parse().unwrap();
            assert!((10..=99).contains(&n));
            assert!(
                parts.iter().any(|a| parts.iter().any(|b| body == format!("{}{}", a, b))),
                "hint {} not built from fields",
                hint
            );
        }
    }

    #[test]
    fn test_password_hint_falls_back_to_work() {
        let mut synth = ProfileSynthesizer::seeded(9);
        let hints: Vec<String> = (0..200)
            .map(|_| synth.generate_password_hint("A", "B", 1980, "C", ""))
            .collect();
        assert!(hints.iter().any(|h| h.contains("work")));
    }

    #[test]
    fn test_unsalted_hash_matches_hint() {
        let mut synth = ProfileSynthesizer::seeded(1);
        let p = synth.generate_profile(None, false);
        assert_eq!(p.hash_type, HashType::Sha512);
        assert!(p.salt.is_none());
        assert_eq!(p.password_hash, hash_password(&p.password_hint));
    }

    #[test]
    fn test_salted_hash_matches_hint_and_salt() {
        let mut synth = ProfileSynthesizer::seeded(1);
        let p = synth.generate_profile(None, true);
        assert_eq!(p.hash_type, HashType::Sha512Salted);
        let salt = p.salt.clone().unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(p.password_hash, hash_password(&format!("{}{}", p.password_hint, salt)));
    }

    #[test]
    fn test_generate_company() {
        let mut synth = ProfileSynthesizer::seeded(2);
        let company = synth.generate_company();
        assert!(pools::COMPANIES.contains(&company.name.as_str()));
        assert_eq!(company.website, format!("https://{}", company_domain(&company.name)));
        assert!(pools::COMPANY_SIZES.contains(&company.size.as_str()));
        assert_eq!(company.departments.len(), 5);
        assert!(company.employees.is_empty());
        assert!(company.url.starts_with("/companies/ID-"));
    }

    #[test]
    fn test_generate_social_profile() {
        let mut synth = ProfileSynthesizer::seeded(4);
        let profile = synth.generate_profile(None, false);
        let social = synth.generate_social_profile(&profile);
        assert_eq!(social.person_id, profile.id);
        assert!((10..=100).contains(&social.posts));
        assert!((50..=1000).contains(&social.followers));
        assert!((30..=500).contains(&social.following));
        assert!(chrono::DateTime::parse_from_rfc3339(&social.last_active).is_ok());
    }
}
