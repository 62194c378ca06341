use std::fmt;

/// Application routes of the vacancy site, relative to the UI base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    About,
    Materials,
    News,
    Vacancies,
    Contacts,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::About => "/",
            AppRoute::Materials => "/poleznye-materialy",
            AppRoute::News => "/novosti",
            AppRoute::Vacancies => "/vakansii",
            AppRoute::Contacts => "/#feedback",
        }
    }

    /// Join the route onto a base URL without doubling the slash
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url() {
        assert_eq!(AppRoute::Vacancies.url("https://cism-ms.ru/"), "https://cism-ms.ru/vakansii");
        assert_eq!(AppRoute::About.url("https://cism-ms.ru"), "https://cism-ms.ru/");
        assert_eq!(AppRoute::Contacts.to_string(), "/#feedback");
    }
}
