// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::DatasetError;
use crate::models::TriviaEntry;

fn entry(search: &str, name: &str, icon: &str) -> TriviaEntry {
    TriviaEntry {
        search: search.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        question: None,
    }
}

fn entry_q(search: &str, name: &str, icon: &str, question: &str) -> TriviaEntry {
    TriviaEntry {
        question: Some(question.to_string()),
        ..entry(search, name, icon)
    }
}

/// The curated annotation table for the Berlin state budget. Order matters:
/// the matcher returns the first containment hit, so entries earlier in the
/// table take precedence over later ones ("Vivantes" appears twice on
/// purpose, targeting two different line items).
static BUILTIN: Lazy<Vec<TriviaEntry>> = Lazy::new(|| {
    vec![
        // Culture
        entry(
            "Stiftung Oper in Berlin",
            "the Opera Foundation (State Opera, Deutsche Oper, Komische Oper)",
            "🎭",
        ),
        entry("Konzerthaus Berlin", "the Konzerthaus Berlin", "🎻"),
        entry("Volksbühne", "the Volksbühne Theater", "🎭"),
        entry("Berliner Philharmoniker", "the Berliner Philharmoniker", "🎼"),
        entry("Friedrichstadt-Palast", "the Friedrichstadt-Palast", "💃"),
        entry("Zentral- und Landesbibliothek", "Libraries (ZLB)", "📚"),
        entry("Tierpark Berlin", "the Tierpark Berlin (Zoo)", "🐻‍❄️"),
        // Transport & streets
        entry("Zuschuss an die BVG", "Inner-city Public Transport (BVG)", "🚌"),
        entry_q(
            "S-Bahn",
            "the S-Bahn",
            "🚆",
            "How many rides could this buy?",
        ),
        entry("öffentlichen Toilettenanlagen", "Public Toilets", "🚽"),
        entry("Straßenreinigung", "Street Cleaning", "🧹"),
        entry("Straßenbeleuchtung", "Street Lighting", "💡"),
        // Matches "Tiefbau und Straßenverwaltung"
        entry("Tiefbau", "Road Maintenance & Engineering", "🚧"),
        // Schools
        entry("Schulbau", "Building New Schools", "🏗️"),
        entry_q(
            "Mittagsverpflegung Schule",
            "School Lunches",
            "🍝",
            "How many plates of pasta is that?",
        ),
        // Health
        entry("Charité", "the Charité Hospital", "🏥"),
        entry("Vivantes", "Vivantes Hospitals", "🏥"),
        entry("Abgeordnetenhaus", "the Parliament (Abgeordnetenhaus)", "🏛️"),
        entry("Berliner Bäder-Betriebe", "Public Pools", "🏊"),
        entry_q(
            "Zinsen für sonstige Kreditmarktmittel",
            "Interest on State Debt",
            "📉",
            "What could Berlin do without this bill?",
        ),
        entry(
            "Sachausgaben für nachweispflichtige Vordrucke",
            "Paper Forms",
            "📄",
        ),
        entry("Kommunikation Hauptstadtmarke", "Capital City Branding", "📢"),
        entry(
            "Barleistungen in Einrichtungen",
            "Cash Handouts in Asylum Facilities",
            "💶",
        ),
        entry("Flüchtlingsunterkünften", "Refugee Accommodation", "⛺"),
        // "Laufende Leistungen zum Lebensunterhalt nach SGB XII und AsylbLG"
        entry(
            "Laufende Leistungen zum Lebensunterhalt",
            "Benefits for Asylum Seekers",
            "🤝",
        ),
        entry(
            "Landesantidiskriminierungsstelle",
            "State Office for Equal Treatment (LADS)",
            "⚖️",
        ),
        entry(
            "Ausgaben für Unterkunft und Heizung",
            "Citizens' Allowance Accommodation",
            "🏘️",
        ),
        entry("Deutschlandticket", "Deutschlandticket Subsidy", "🎫"),
        entry("infraVelo", "InfraVelo (Bike Planning)", "🚲"),
        entry(
            "Verbesserung des Radverkehrs",
            "Bicycle Traffic Improvements",
            "🎨",
        ),
        entry("Radverkehrsprojekten", "Cycling Infrastructure Projects", "🚧"),
        entry(
            "Berlin Energie Rekom 3",
            "Buying Vattenfall's Heating Grid",
            "🔥",
        ),
        entry(
            "BEN Berlin Energie",
            "Buying the Gas Network (BEN Berlin Energie)",
            "⛽",
        ),
        entry("Vivantes", "Vivantes Hospitals Capital Injection", "🏥"),
        entry("Messe Berlin", "Messe Berlin Capital Injection", "🎪"),
        // No fitting emoji exists; renderers resolve the named icon key.
        entry("Tempelhof Projekt", "Tempelhof Field Management", "kite"),
        entry("Tegel Projekt", "Tegel Airport Development", "✈️"),
        entry(
            "Maßregelvollzug",
            "Psychiatric Detention (Maßregelvollzug)",
            "🏥",
        ),
        entry(
            "Verfassungsschutz",
            "State Security (Verfassungsschutz)",
            "🕵️",
        ),
        entry("Body- und Dashcams", "Police Body Cams", "🎥"),
    ]
});

/// The built-in annotation table, in authored order.
pub fn builtin_table() -> &'static [TriviaEntry] {
    &BUILTIN
}

/// Load an alternative table from a JSON file (an array of entries). The
/// file is a versioned configuration artifact; order is preserved as
/// authored. An entry with an empty `search` would match every label after
/// it, so it is rejected as malformed.
pub fn load_table(path: impl AsRef<Path>) -> Result<Vec<TriviaEntry>, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table: Vec<TriviaEntry> = serde_json::from_str(&raw)?;
    validate_table(&table)?;
    Ok(table)
}

pub fn validate_table(table: &[TriviaEntry]) -> Result<(), DatasetError> {
    for e in table {
        if e.search.is_empty() {
            return Err(DatasetError::EmptySearch {
                name: e.name.clone(),
            });
        }
    }
    Ok(())
}
