//! The fixed set of top-level string fields that may be overridden

use crate::Profile;

/// Overridable scalar fields of a [`Profile`], named the way templates
/// reference them (`{{ .CompanyToApplyTo }}`).
///
/// List-typed fields (education, experience, skills, projects) are
/// deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Email,
    Phone,
    Address,
    Website,
    Github,
    CompanyToApplyTo,
    RoleToApplyTo,
}

impl ScalarField {
    pub const ALL: [ScalarField; 8] = [
        ScalarField::Name,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::Address,
        ScalarField::Website,
        ScalarField::Github,
        ScalarField::CompanyToApplyTo,
        ScalarField::RoleToApplyTo,
    ];

    /// Template-facing name
    pub fn name(self) -> &'static str {
        match self {
            ScalarField::Name => "Name",
            ScalarField::Email => "Email",
            ScalarField::Phone => "Phone",
            ScalarField::Address => "Address",
            ScalarField::Website => "Website",
            ScalarField::Github => "Github",
            ScalarField::CompanyToApplyTo => "CompanyToApplyTo",
            ScalarField::RoleToApplyTo => "RoleToApplyTo",
        }
    }

    /// Case-sensitive lookup by template-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn get(self, profile: &Profile) -> &str {
        match self {
            ScalarField::Name => &profile.name,
            ScalarField::Email => &profile.email,
            ScalarField::Phone => &profile.phone,
            ScalarField::Address => &profile.address,
            ScalarField::Website => &profile.website,
            ScalarField::Github => &profile.github,
            ScalarField::CompanyToApplyTo => &profile.company_to_apply_to,
            ScalarField::RoleToApplyTo => &profile.role_to_apply_to,
        }
    }

    pub fn set(self, profile: &mut Profile, value: String) {
        let slot = match self {
            ScalarField::Name => &mut profile.name,
            ScalarField::Email => &mut profile.email,
            ScalarField::Phone => &mut profile.phone,
            ScalarField::Address => &mut profile.address,
            ScalarField::Website => &mut profile.website,
            ScalarField::Github => &mut profile.github,
            ScalarField::CompanyToApplyTo => &mut profile.company_to_apply_to,
            ScalarField::RoleToApplyTo => &mut profile.role_to_apply_to,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in ScalarField::ALL {
            assert_eq!(ScalarField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(ScalarField::from_name("name"), None);
        assert_eq!(ScalarField::from_name("Experience"), None);
    }

    #[test]
    fn test_get_and_set() {
        let mut profile = Profile::default();
        ScalarField::RoleToApplyTo.set(&mut profile, "Engineer".to_string());
        assert_eq!(profile.role_to_apply_to, "Engineer");
        assert_eq!(ScalarField::RoleToApplyTo.get(&profile), "Engineer");
        assert_eq!(ScalarField::Name.get(&profile), "");
    }
}
