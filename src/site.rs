//! Owner details shown across the page.

pub const OWNER: &str = "Damijan Kante";
pub const TAGLINE: &str = "Data Analyst · Graphic Designer · Software Developer";
pub const EMAIL: &str = "damijan.kante@gmail.com";
pub const PHONE: &str = "+386 (40) 525 827";
pub const LOCATION: &str = "Ptuj, Slovenia";
pub const GITHUB: &str = "https://github.com/damijankante";
pub const GITHUB_REPOS: &str = "https://github.com/damijankante?tab=repositories";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/damijankante";
pub const BEHANCE: &str = "https://www.behance.net/damijankante";
