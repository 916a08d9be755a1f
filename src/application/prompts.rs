//! Prompt templates sent to the generation provider

use crate::domain::entities::ItineraryRequest;

const PREAMBLE: &str = "You are a friendly AI travel assistant. Answer naturally and conversationally. \
Keep responses concise but helpful. Focus on travel planning, destinations, tips, etc.";

/// Wrap a user turn in the assistant persona. Languages other than `en`
/// get an explicit reply-language instruction.
pub fn assistant_prompt(user_text: &str, lang: &str) -> String {
    let lang_line = if lang.is_empty() || lang.eq_ignore_ascii_case("en") {
        String::new()
    } else {
        format!(" Respond in {}.", lang)
    };
    format!("{}{}\n\nUser: {}\nAssistant:", PREAMBLE, lang_line, user_text)
}

/// Itinerary instruction asking for an HTML fragment with a summary,
/// per-day sections and a booking call-to-action.
pub fn build_itinerary_prompt(request: &ItineraryRequest) -> String {
    let refinement = if request.refinement.is_empty() {
        String::new()
    } else {
        format!(" Additional notes: {}", request.refinement)
    };

    format!(
        "Generate a detailed {mode} travel itinerary for {destination} from {start} to {end} \
for {people} people with a budget of ₹{budget}. Preferences: {preferences}.{refinement}

Please format the response as structured HTML that can be directly inserted into a div, including:
- A summary section with trip details (dates, people, budget, mode)
- Daily sections (Day 1 - Date, etc.) with flights/hotels/transport/activities
- End with a ready-to-book section

Use professional styling classes like bg-white/10, rounded-lg, etc., compatible with Tailwind CSS. \
Keep it concise and actionable.",
        mode = request.mode,
        destination = request.destination,
        start = request.start_date,
        end = request.end_date,
        people = request.num_people,
        budget = request.budget,
        preferences = request.preferences,
        refinement = refinement,
    )
}
