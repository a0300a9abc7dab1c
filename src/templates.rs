//! Preset panel lists and default panel scaffolding.
//!
//! The [`TemplateCatalog`] holds named, ready-made panel lists. The built-in
//! presets cover common development setups; user templates from the
//! `[templates.<id>]` config section are merged over them.
//!
//! Templates are ordinary panel lists: nothing downstream knows or cares
//! that a list came from a template.

use crate::panel::{Panel, Split};
use crate::profile::DEFAULT_PROFILE;
use crate::validate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Directory given to scaffolded panels when no default is configured.
pub const DEFAULT_DIRECTORY: &str = r"C:\";

/// Named colors offered for panels, in rotation order.
pub const PANEL_COLORS: [(&str, &str); 11] = [
    ("Red", "#ff6b6b"),
    ("Teal", "#4ecdc4"),
    ("Blue", "#45b7d1"),
    ("Green", "#96ceb4"),
    ("Purple", "#dda0dd"),
    ("Orange", "#ffa726"),
    ("Pink", "#f06292"),
    ("Midnight Blue", "#191970"),
    ("Lime Green", "#ADFF2F"),
    ("Crimson Red", "#DC143C"),
    ("Golden Yellow", "#FFD700"),
];

/// A named preset panel list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Template {
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// The panels, in split order.
    pub panels: Vec<Panel>,
}

impl Template {
    fn new(name: &str, description: &str, panels: Vec<Panel>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            panels,
        }
    }

    /// Validate the template: a non-blank name plus the panel rules.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Template name is required".to_string());
        }
        errors.extend(validate::validate(&self.panels));
        errors
    }
}

/// Templates keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
}

impl TemplateCatalog {
    /// The built-in presets.
    pub fn builtin() -> Self {
        let ps = DEFAULT_PROFILE;
        let tab = |title: &str, dir: &str, cmd: &str, color: &str| {
            Panel::anchor(title, dir, color, ps).with_commands(cmd)
        };

        let mut catalog = Self::default();
        catalog.insert(
            "fullstack",
            Template::new(
                "Full-Stack Development",
                "Frontend + Backend + Database setup",
                vec![
                    tab("Frontend", r"D:\MyProjects\my-app\frontend", "npm run dev", "#4ecdc4"),
                    tab("Backend API", r"D:\MyProjects\my-app\backend", "npm run start:dev", "#ff6b6b")
                        .splitting(Split::Vertical, 0.5),
                    tab("Database", r"D:\MyProjects\my-app", "docker-compose up postgres", "#45b7d1")
                        .splitting(Split::Vertical, 0.3),
                ],
            ),
        );
        catalog.insert(
            "devops",
            Template::new(
                "DevOps Monitoring",
                "Database + ETL + Analytics",
                vec![
                    tab("PostgreSQL", r"C:\Database", "psql -U postgres -h localhost -p 5432 mydb", "#4f46e5"),
                    tab("ETL Pipeline", r"C:\DataPipeline", "python etl_pipeline.py --env=dev", "#f59e0b")
                        .splitting(Split::Vertical, 0.5),
                    tab("Jupyter Lab", r"C:\Analytics", "jupyter lab --port=8888", "#10b981")
                        .splitting(Split::Horizontal, 0.5),
                ],
            ),
        );
        catalog.insert(
            "testing",
            Template::new(
                "Testing Environment",
                "Unit Tests + E2E Tests",
                vec![
                    tab("Unit Tests", r"C:\Projects\tests", "npm run test:watch -- --coverage", "#ff6b6b"),
                    tab("E2E Tests", r"C:\Projects\e2e", "npx playwright test --headed", "#4ecdc4")
                        .splitting(Split::Vertical, 0.3),
                ],
            ),
        );
        catalog.insert(
            "dataops",
            Template::new(
                "Data Operations",
                "Database + ETL + Analytics",
                vec![
                    tab("PostgreSQL", r"C:\Database", "psql -U postgres -h localhost -p 5432 mydb", "#4f46e5"),
                    tab("ETL Pipeline", r"C:\DataPipeline", "python etl_pipeline.py --env=dev", "#f59e0b")
                        .splitting(Split::Vertical, 0.5),
                    tab("Jupyter Lab", r"C:\Analytics", "jupyter lab --port=8888", "#10b981")
                        .splitting(Split::Horizontal, 0.4),
                ],
            ),
        );
        catalog.insert(
            "mobile",
            Template::new(
                "Mobile Development",
                "React Native + iOS + Android",
                vec![
                    tab("Metro Bundler", r"C:\MobileApps\MyApp", "npx react-native start", "#f06292"),
                    tab("iOS Simulator", r"C:\MobileApps\MyApp", "npx react-native run-ios", "#4ecdc4")
                        .splitting(Split::Vertical, 0.5),
                    tab("Android Emulator", r"C:\MobileApps\MyApp", "npx react-native run-android", "#96ceb4")
                        .splitting(Split::Vertical, 0.5),
                ],
            ),
        );
        catalog.insert(
            "custom",
            Template::new(
                "Custom Setup",
                "Start with a single panel",
                vec![tab("Terminal", r"C:\", "", "#64748b")],
            ),
        );
        catalog
    }

    /// Add or replace a template.
    pub fn insert(&mut self, id: &str, template: Template) {
        self.templates.insert(id.to_string(), template);
    }

    /// Merge templates over this catalog, replacing same-named entries.
    pub fn merged<I>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = (String, Template)>,
    {
        self.templates.extend(templates);
        self
    }

    /// Look up a template by identifier.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Iterate `(id, template)` pairs sorted by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Color for the panel at `index`, rotating through [`PANEL_COLORS`].
pub fn palette_color(index: usize) -> &'static str {
    PANEL_COLORS[index % PANEL_COLORS.len()].1
}

/// Build `count` default panels.
///
/// Panel `i` is titled `Panel i+1`, opens in `directory` with `profile`
/// and takes the next palette color. Later panels split vertically at 0.5.
pub fn scaffold(count: usize, directory: &str, profile: &str) -> Vec<Panel> {
    (0..count)
        .map(|i| {
            let panel = Panel::anchor(&format!("Panel {}", i + 1), directory, palette_color(i), profile);
            if i == 0 {
                panel
            } else {
                panel.splitting(Split::Vertical, 0.5)
            }
        })
        .collect()
}
