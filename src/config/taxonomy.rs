// src/config/taxonomy.rs
//! Attribute display labels as they appear in profile exports.

pub const TECHNICAL: &[&str] = &[
    "Corners", "Crossing", "Dribbling", "Finishing", "First Touch", "Free Kick Taking",
    "Heading", "Long Shots", "Long Throws", "Marking", "Passing", "Penalty Taking",
    "Tackling", "Technique",
];

pub const MENTAL: &[&str] = &[
    "Aggression", "Anticipation", "Bravery", "Composure", "Concentration", "Decisions",
    "Determination", "Flair", "Leadership", "Off the Ball", "Positioning", "Teamwork",
    "Vision", "Work Rate",
];

pub const PHYSICAL: &[&str] = &[
    "Acceleration", "Agility", "Balance", "Jumping Reach", "Natural Fitness", "Pace",
    "Stamina", "Strength",
];

// First Touch and Passing repeat the outfield labels; they fold to the same keys.
pub const GOALKEEPING: &[&str] = &[
    "Aerial Reach", "Command of Area", "Communication", "Eccentricity", "First Touch",
    "Handling", "Kicking", "One on Ones", "Passing", "Punching (Tendency)", "Reflexes",
    "Rushing Out (Tendency)", "Throwing",
];

/// Outfield groups first, then goalkeeping. Order decides which label wins a key.
pub fn all_groups() -> [&'static [&'static str]; 4] {
    [TECHNICAL, MENTAL, PHYSICAL, GOALKEEPING]
}
