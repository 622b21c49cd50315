//! Skills list with a live, case-insensitive filter.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillList {
    skills: Vec<String>,
    query: String,
    /// Collapsed by the show/hide toggle.
    pub hidden: bool,
}

impl SkillList {
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills,
            query: String::new(),
            hidden: false,
        }
    }

    /// "Skills (n)", counting every skill regardless of the filter.
    pub fn heading(&self) -> String {
        format!("Skills ({})", self.skills.len())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Skills whose text contains the query, ignoring case.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        let needle = self.query.to_lowercase();
        self.skills
            .iter()
            .filter(move |skill| skill.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// Flip visibility and return the new toggle label.
    pub fn toggle_hidden(&mut self) -> &'static str {
        self.hidden = !self.hidden;
        self.toggle_label()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.hidden { "Show Skills" } else { "Hide Skills" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> SkillList {
        SkillList::new(vec!["HTML".into(), "CSS".into(), "JavaScript".into(), "Rust".into()])
    }

    #[test]
    fn empty_query_shows_everything() {
        let list = skills();
        assert_eq!(list.visible().count(), 4);
        assert_eq!(list.heading(), "Skills (4)");
    }

    #[test]
    fn filter_ignores_case() {
        let mut list = skills();
        list.set_query("s");
        assert_eq!(list.visible().collect::<Vec<_>>(), vec!["CSS", "JavaScript", "Rust"]);
        list.set_query("JAVA");
        assert_eq!(list.visible().collect::<Vec<_>>(), vec!["JavaScript"]);
        assert_eq!(list.heading(), "Skills (4)");
    }

    #[test]
    fn toggle_labels() {
        let mut list = skills();
        assert_eq!(list.toggle_label(), "Hide Skills");
        assert_eq!(list.toggle_hidden(), "Show Skills");
        assert!(list.hidden);
        assert_eq!(list.toggle_hidden(), "Hide Skills");
    }
}
