use crate::models::listing::{ListingDraft, PropertyType};

/// Structured prompt describing the listing being composed
#[derive(Debug, Clone)]
pub struct ListingPrompt {
    pub property_type: Option<PropertyType>,
    pub rooms: Option<u32>,
    pub surface: i32,
    pub city: String,
    pub wilaya: String,
    pub amenities: Vec<String>,
}

impl ListingPrompt {
    pub fn from_draft(draft: &ListingDraft) -> Self {
        Self {
            property_type: draft.property_type,
            rooms: draft.rooms,
            surface: draft.surface,
            city: draft.city.clone(),
            wilaya: draft.wilaya.clone(),
            amenities: draft.amenities.clone(),
        }
    }

    /// Render the prompt sent to the text provider
    pub fn to_prompt_text(&self) -> String {
        let mut text = String::from(
            "Rédige une description attrayante pour une annonce immobilière: ",
        );
        text.push_str(match self.property_type {
            Some(PropertyType::Apartment) => "appartement",
            Some(PropertyType::House) => "maison",
            Some(PropertyType::Studio) => "studio",
            Some(PropertyType::Commercial) => "local commercial",
            Some(PropertyType::Office) => "bureau",
            Some(PropertyType::Warehouse) => "hangar",
            Some(PropertyType::Land) => "terrain",
            None => "bien immobilier",
        });
        if let Some(rooms) = self.rooms {
            text.push_str(&format!(", {rooms} pièces"));
        }
        text.push_str(&format!(", {} m², {}, {}.", self.surface, self.city, self.wilaya));
        if !self.amenities.is_empty() {
            text.push_str(&format!(" Atouts: {}.", self.amenities.join(", ")));
        }
        text
    }
}
