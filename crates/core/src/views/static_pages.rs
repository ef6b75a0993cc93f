/// Content of the contact page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub heading: &'static str,
    pub body: Vec<&'static str>,
}

impl ContactView {
    pub fn new() -> Self {
        Self {
            heading: "Contact",
            body: vec![
                "Questions, bug reports or data issues?",
                "Open an issue on the project tracker and we will get back to you.",
            ],
        }
    }
}

impl Default for ContactView {
    fn default() -> Self {
        Self::new()
    }
}

/// Shown for any path no route matches.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundView {
    /// The path that was requested.
    pub path: String,
    pub heading: &'static str,
    pub message: &'static str,
    pub home_path: &'static str,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            heading: "404 - Not Found",
            message: "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable.",
            home_path: "/",
        }
    }
}
