pub const ALL_FILTER: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterCategory {
    #[default]
    All,
    Tag(String),
}

impl FilterCategory {
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILTER {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Tag(tag) => tag,
        }
    }

    /// `categories` is the raw `data-category` value; containment is substring-based.
    pub fn matches(&self, categories: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => {
                categories.is_some_and(|categories| categories.contains(tag.as_str()))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectFilter {
    active: FilterCategory,
}

impl ProjectFilter {
    pub fn active(&self) -> &FilterCategory {
        &self.active
    }

    /// Selects `tag` and returns the visibility of each item, in order.
    pub fn apply<'a, I>(&mut self, tag: &str, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.active = FilterCategory::parse(tag);
        items
            .into_iter()
            .map(|categories| self.active.matches(categories))
            .collect()
    }
}
