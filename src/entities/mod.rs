// Entity Models
//
// Plain records produced by the synthesizer and consumed by the
// exporters and the wordlist engine. None of them is mutated after creation.

pub mod company;
pub mod profile;
pub mod social;

pub use company::{company_domain, Company};
pub use profile::{HashType, Profile, SocialLinks};
pub use social::SocialProfile;
