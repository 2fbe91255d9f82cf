use serde::{Deserialize, Deserializer};
use std::fmt;

/// Placeholder written by spreadsheet exports for empty cells.
const MISSING: &str = "nan";

/// One entry of the catalog, as found in a row of the source file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ProjectRecord {
    #[serde(rename = "Team", deserialize_with = "cell")]
    pub team: String,
    #[serde(rename = "Member", default, deserialize_with = "cell")]
    pub members: String,
    #[serde(rename = "Description", default, deserialize_with = "cell")]
    pub description: String,
    #[serde(rename = "Link", default, deserialize_with = "cell")]
    pub link: String,
    #[serde(rename = "Image", default, deserialize_with = "cell")]
    pub image: String,
    #[serde(rename = "MemberImages", default, deserialize_with = "image_list")]
    pub member_images: Vec<String>,
}

impl ProjectRecord {
    #[cfg(test)]
    pub fn new(team: &str, members: &str, description: &str) -> Self {
        Self {
            team: team.to_owned(),
            members: members.to_owned(),
            description: description.to_owned(),
            ..Self::default()
        }
    }

    /// Fields looked at by the free-text search, in display order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.team[..], &self.members[..], &self.description[..]]
    }

    /// Names of the columns left empty for this record that a card needs.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Team", &self.team),
            ("Link", &self.link),
            ("Image", &self.image),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.is_empty().then_some(name))
        .collect()
    }
}

impl fmt::Display for ProjectRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.team.is_empty() {
            write!(f, "<unnamed team>")
        } else {
            write!(f, "{}", self.team)
        }
    }
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(MISSING)
}

/// Split a comma separated list of image references. Missing values and
/// empty entries are dropped.
pub fn parse_member_images(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|image| !is_missing(image))
        .map(String::from)
        .collect()
}

fn cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|value| value.trim().to_owned())
        .filter(|value| !is_missing(value))
        .unwrap_or_default())
}

fn image_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|value| parse_member_images(&value))
        .unwrap_or_default())
}

#[test]
fn test_parse_member_images() {
    assert!(parse_member_images("").is_empty());
    assert!(parse_member_images("nan").is_empty());
    assert_eq!(
        parse_member_images("img1.png,img2.png"),
        vec!["img1.png", "img2.png"]
    );
    assert_eq!(
        parse_member_images(" a.png , ,b.png,"),
        vec!["a.png", "b.png"]
    );
}

#[test]
fn test_missing_fields() {
    let mut r = ProjectRecord::new("Alpha", "A, B", "vision project");
    assert_eq!(r.missing_fields(), vec!["Link", "Image"]);
    r.link = "https://example.com/alpha".into();
    r.image = "alpha.png".into();
    assert!(r.missing_fields().is_empty());
    assert_eq!(
        ProjectRecord::default().missing_fields(),
        vec!["Team", "Link", "Image"]
    );
}

#[test]
fn test_display() {
    assert_eq!(ProjectRecord::new("Beta", "C", "").to_string(), "Beta");
    assert_eq!(ProjectRecord::default().to_string(), "<unnamed team>");
}
