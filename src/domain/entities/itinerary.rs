/// Trip parameters for one itinerary generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    pub start_date: String,
    pub end_date: String,
    pub num_people: String,
    pub budget: String,
    pub destination: String,
    pub preferences: String,
    pub mode: String,
    pub refinement: String,
    pub lang: String,
}

impl ItineraryRequest {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            num_people: String::new(),
            budget: String::new(),
            destination: destination.into(),
            preferences: String::new(),
            mode: "budget".to_string(),
            refinement: String::new(),
            lang: "en".to_string(),
        }
    }

    pub fn with_people(mut self, num_people: impl Into<String>) -> Self {
        self.num_people = num_people.into();
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = budget.into();
        self
    }

    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = preferences.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_refinement(mut self, refinement: impl Into<String>) -> Self {
        self.refinement = refinement.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}
