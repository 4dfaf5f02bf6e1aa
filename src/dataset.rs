// 🗂️ Dataset Builder - orchestrates N synthesizer calls into one collection

use crate::entities::{Company, Profile, SocialProfile};
use crate::errors::GeneratorError;
use crate::synthesizer::ProfileSynthesizer;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MAX_PROFILES: usize = 1000;
pub const MAX_COMPANIES: usize = 20;

// ============================================================================
// DATASET
// ============================================================================

/// In-memory collection; serialized as the `data` object of a JSON export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub profiles: Vec<Profile>,
    pub companies: Vec<Company>,
    pub social_profiles: Vec<SocialProfile>,

    /// Kept for export-shape compatibility, never populated
    #[serde(default)]
    pub relationships: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub total_profiles: usize,
    pub total_companies: usize,
    pub total_social_profiles: usize,
    pub average_age: Option<f64>,

    /// (company name, employee count)
    pub most_popular_company: Option<(String, usize)>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.profiles.clear();
        self.companies.clear();
        self.social_profiles.clear();
        self.relationships.clear();
    }

    pub fn social_for(&self, profile: &Profile) -> Option<&SocialProfile> {
        self.social_profiles
            .iter()
            .find(|s| s.person_id == profile.id)
    }

    pub fn employees_of<'a>(&'a self, company: &'a Company) -> impl Iterator<Item = &'a Profile> + 'a {
        self.profiles.iter().filter(move |p| p.company == company.name)
    }

    pub fn salted_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|p| p.is_salted())
    }

    pub fn stats(&self) -> DatasetStats {
        let average_age = if self.profiles.is_empty() {
            None
        } else {
            let total: i64 = self.profiles.iter().map(|p| p.age as i64).sum();
            Some(total as f64 / self.profiles.len() as f64)
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for profile in &self.profiles {
            *counts.entry(profile.company.as_str()).or_insert(0) += 1;
        }

        // Highest count wins, name breaks ties so the answer is stable
        let most_popular_company = counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, count)| (name.to_string(), count));

        DatasetStats {
            total_profiles: self.profiles.len(),
            total_companies: self.companies.len(),
            total_social_profiles: self.social_profiles.len(),
            average_age,
            most_popular_company,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub num_profiles: usize,
    pub num_companies: usize,
    pub use_salt: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            num_profiles: 20,
            num_companies: 5,
            use_salt: false,
        }
    }
}

impl GenerationOptions {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=MAX_PROFILES).contains(&self.num_profiles) {
            return Err(GeneratorError::InvalidOptions(format!(
                "profile count must be between 1 and {}, got {}",
                MAX_PROFILES, self.num_profiles
            )));
        }
        if !(1..=MAX_COMPANIES).contains(&self.num_companies) {
            return Err(GeneratorError::InvalidOptions(format!(
                "company count must be between 1 and {}, got {}",
                MAX_COMPANIES, self.num_companies
            )));
        }
        Ok(())
    }
}

pub struct DatasetBuilder {
    options: GenerationOptions,
}

impl DatasetBuilder {
    pub fn new(options: GenerationOptions) -> Self {
        DatasetBuilder { options }
    }

    /// Companies first, then people employed by one of them
    pub fn build<R: Rng>(&self, synth: &mut ProfileSynthesizer<R>) -> Result<Dataset, GeneratorError> {
        self.options.validate()?;
        let GenerationOptions { num_profiles, num_companies, use_salt } = self.options;

        let mut dataset = Dataset::default();

        log::info!("generating {} companies", num_companies);
        for _ in 0..num_companies {
            dataset.companies.push(synth.generate_company());
        }

        log::info!(
            "generating {} profiles{}",
            num_profiles,
            if use_salt { " with salted hashes" } else { "" }
        );

        let employers: Vec<String> = dataset.companies.iter().map(|c| c.name.clone()).collect();
        let step = if num_profiles >= 100 { 25 } else { 10 };

        for i in 0..num_profiles {
            let employer = employers.choose(synth.rng_mut()).cloned();
            let profile = synth.generate_profile(employer.as_deref(), use_salt);
            let social = synth.generate_social_profile(&profile);

            dataset.profiles.push(profile);
            dataset.social_profiles.push(social);

            if (i + 1) % step == 0 || i + 1 == num_profiles {
                log::info!("generated {}/{} profiles", i + 1, num_profiles);
            }
        }

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::profile::fixtures::sample_profile;

    fn options(num_profiles: usize, num_companies: usize, use_salt: bool) -> GenerationOptions {
        GenerationOptions { num_profiles, num_companies, use_salt }
    }

    #[test]
    fn test_build_counts() {
        let mut synth = ProfileSynthesizer::seeded(1);
        let dataset = DatasetBuilder::new(options(25, 3, false)).build(&mut synth).unwrap();

        assert_eq!(dataset.profiles.len(), 25);
        assert_eq!(dataset.companies.len(), 3);
        assert_eq!(dataset.social_profiles.len(), 25);
        assert!(dataset.relationships.is_empty());
    }

    #[test]
    fn test_profiles_work_for_generated_companies() {
        let mut synth = ProfileSynthesizer::seeded(2);
        let dataset = DatasetBuilder::new(options(40, 2, false)).build(&mut synth).unwrap();

        let names: Vec<&str> = dataset.companies.iter().map(|c| c.name.as_str()).collect();
        for profile in &dataset.profiles {
            assert!(names.contains(&profile.company.as_str()));
            assert!(dataset.social_for(profile).is_some());
        }
    }

    #[test]
    fn test_salt_option_applies_to_every_profile() {
        let mut synth = ProfileSynthesizer::seeded(3);
        let dataset = DatasetBuilder::new(options(10, 1, true)).build(&mut synth).unwrap();
        assert_eq!(dataset.salted_profiles().count(), 10);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut synth = ProfileSynthesizer::seeded(4);
        for bad in [options(0, 3, false), options(1001, 3, false), options(10, 0, false), options(10, 21, false)] {
            let err = DatasetBuilder::new(bad).build(&mut synth).unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidOptions(_)));
        }
    }

    #[test]
    fn test_stats() {
        let mut a = sample_profile();
        a.age = 30;
        let mut b = sample_profile();
        b.id = "ID-2".into();
        b.age = 40;
        let mut c = sample_profile();
        c.id = "ID-3".into();
        c.age = 50;
        c.company = "Beta Networks".into();

        let dataset = Dataset {
            profiles: vec![a, b, c],
            ..Dataset::default()
        };
        let stats = dataset.stats();

        assert_eq!(stats.total_profiles, 3);
        assert_eq!(stats.average_age, Some(40.0));
        assert_eq!(stats.most_popular_company, Some(("TechCorp Solutions".to_string(), 2)));
    }

    #[test]
    fn test_stats_empty_and_clear() {
        let mut synth = ProfileSynthesizer::seeded(5);
        let mut dataset = DatasetBuilder::new(options(5, 1, false)).build(&mut synth).unwrap();
        assert!(!dataset.is_empty());

        dataset.clear();
        assert!(dataset.is_empty());

        let stats = dataset.stats();
        assert_eq!(stats.total_companies, 0);
        assert!(stats.average_age.is_none());
        assert!(stats.most_popular_company.is_none());
    }
}
