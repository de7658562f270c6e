//! Sidebar navigation model

use crate::routes::AppRoute;
use serde::Serialize;

/// Lucide glyphs used by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    LayoutDashboard,
    Upload,
    Bell,
    FileText,
    Stethoscope,
    MessageSquare,
    AlertCircle,
    Languages,
    User,
    Menu,
    Close,
}

impl Icon {
    /// Lucide icon name
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Upload => "upload",
            Icon::Bell => "bell",
            Icon::FileText => "file-text",
            Icon::Stethoscope => "stethoscope",
            Icon::MessageSquare => "message-square",
            Icon::AlertCircle => "alert-circle",
            Icon::Languages => "languages",
            Icon::User => "user",
            Icon::Menu => "menu",
            Icon::Close => "x",
        }
    }
}

/// Icon tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Purple,
    Blue,
    Green,
    Yellow,
    Pink,
    Red,
    Cyan,
    Orange,
    Indigo,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Purple => "accent-purple",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Yellow => "accent-yellow",
            Accent::Pink => "accent-pink",
            Accent::Red => "accent-red",
            Accent::Cyan => "accent-cyan",
            Accent::Orange => "accent-orange",
            Accent::Indigo => "accent-indigo",
        }
    }
}

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub route: AppRoute,
    pub label: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

impl NavEntry {
    const fn new(route: AppRoute, label: &'static str, icon: Icon, accent: Accent) -> Self {
        Self {
            route,
            label,
            icon,
            accent,
        }
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

static NAV_ENTRIES: [NavEntry; 10] = [
    NavEntry::new(AppRoute::Home, "Home", Icon::Home, Accent::Purple),
    NavEntry::new(AppRoute::Dashboard, "Dashboard", Icon::LayoutDashboard, Accent::Blue),
    NavEntry::new(
        AppRoute::UploadPrescription,
        "Upload Prescription",
        Icon::Upload,
        Accent::Green,
    ),
    NavEntry::new(AppRoute::Reminders, "Reminders", Icon::Bell, Accent::Yellow),
    NavEntry::new(AppRoute::Symptoms, "Symptoms", Icon::FileText, Accent::Pink),
    NavEntry::new(AppRoute::Consultations, "Consultations", Icon::Stethoscope, Accent::Red),
    NavEntry::new(AppRoute::Chatbot, "AI Chatbot", Icon::MessageSquare, Accent::Cyan),
    NavEntry::new(AppRoute::Emergency, "Emergency", Icon::AlertCircle, Accent::Orange),
    NavEntry::new(AppRoute::Language, "Language", Icon::Languages, Accent::Indigo),
    NavEntry::new(AppRoute::Profile, "Profile", Icon::User, Accent::Purple),
];

/// Sidebar entries in display order
pub fn nav_entries() -> &'static [NavEntry] {
    &NAV_ENTRIES
}

/// Serializable summary of a sidebar link, as listed by the CLI and `/api/nav`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavDescriptor {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<&NavEntry> for NavDescriptor {
    fn from(entry: &NavEntry) -> Self {
        Self {
            path: entry.path(),
            label: entry.label,
            icon: entry.icon.name(),
        }
    }
}

pub fn nav_descriptors() -> Vec<NavDescriptor> {
    NAV_ENTRIES.iter().map(NavDescriptor::from).collect()
}
