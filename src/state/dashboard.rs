//! Dashboard data and view state
//!
//! Everything shown here is demo data built at startup.

use super::account::UserProfile;
use chrono::{DateTime, Duration, Utc};

/// Headline fleet numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetStats {
    pub active_vehicles: u32,
    pub total_trips: u32,
    pub avg_speed_kmh: u32,
    pub fuel_efficiency_pct: u32,
}

/// One stat tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    pub trending: bool,
}

impl FleetStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Active Vehicles",
                value: self.active_vehicles.to_string(),
                subtitle: "+12% from last week",
                trending: true,
            },
            StatCard {
                title: "Total Trips Today",
                value: self.total_trips.to_string(),
                subtitle: "+8% from yesterday",
                trending: true,
            },
            StatCard {
                title: "Avg Speed (km/h)",
                value: self.avg_speed_kmh.to_string(),
                subtitle: "Optimal range",
                trending: false,
            },
            StatCard {
                title: "Fuel Efficiency",
                value: format!("{}%", self.fuel_efficiency_pct),
                subtitle: "Above average",
                trending: true,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Completed,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub destination: String,
    pub completed_at: DateTime<Utc>,
    pub distance_km: f64,
    pub status: TripStatus,
}

/// Dashboard quick action tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    FleetManagement,
    ScheduleTrip,
    Analytics,
    FuelMonitoring,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        Self::FleetManagement,
        Self::ScheduleTrip,
        Self::Analytics,
        Self::FuelMonitoring,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::FleetManagement => "Fleet Management",
            Self::ScheduleTrip => "Schedule Trip",
            Self::Analytics => "Analytics",
            Self::FuelMonitoring => "Fuel Monitoring",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FleetManagement => "Monitor and manage all vehicles in your fleet",
            Self::ScheduleTrip => "Plan and schedule new journeys efficiently",
            Self::Analytics => "View detailed analytics and insights",
            Self::FuelMonitoring => "Track fuel consumption and efficiency",
        }
    }
}

/// Entries of the profile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    Profile,
    Settings,
    Logout,
}

impl ProfileMenuItem {
    pub const ALL: [ProfileMenuItem; 3] = [Self::Profile, Self::Settings, Self::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Logout => "Logout",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub user: UserProfile,
    pub stats: FleetStats,
    pub recent_trips: Vec<Trip>,
    pub traffic_status: String,
    /// Traffic density as a percentage of normal capacity
    pub traffic_density_pct: u16,
    pub notifications: u32,
}

impl DashboardData {
    /// Demo data with trip times relative to `now`
    pub fn sample(now: DateTime<Utc>) -> Self {
        let trip = |destination: &str, ago: Duration, distance_km| Trip {
            destination: destination.to_string(),
            completed_at: now - ago,
            distance_km,
            status: TripStatus::Completed,
        };

        Self {
            user: UserProfile {
                name: "Raghavendara".to_string(),
                email: "graghav4866@gmail.com".to_string(),
            },
            stats: FleetStats {
                active_vehicles: 245,
                total_trips: 1829,
                avg_speed_kmh: 42,
                fuel_efficiency_pct: 85,
            },
            recent_trips: vec![
                trip("Downtown Office", Duration::hours(2), 12.5),
                trip("Shopping Mall", Duration::hours(5), 8.2),
                trip("Airport Terminal", Duration::days(1), 24.8),
            ],
            traffic_status: "Moderate".to_string(),
            traffic_density_pct: 65,
            notifications: 3,
        }
    }
}

/// Human label for how long ago `then` was
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    if elapsed.num_days() >= 1 {
        plural(elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        plural(elapsed.num_minutes(), "minute")
    } else {
        "just now".to_string()
    }
}

/// Interactive state of the dashboard view
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub data: DashboardData,
    pub dark_mode: bool,
    pub menu_open: bool,
    pub menu_index: usize,
    pub selected_action: usize,
}

impl DashboardState {
    pub fn new(data: DashboardData, dark_mode: bool) -> Self {
        Self {
            data,
            dark_mode,
            menu_open: false,
            menu_index: 0,
            selected_action: 0,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.menu_index = 0;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn next_menu_item(&mut self) {
        self.menu_index = (self.menu_index + 1) % ProfileMenuItem::ALL.len();
    }

    pub fn prev_menu_item(&mut self) {
        let len = ProfileMenuItem::ALL.len();
        self.menu_index = (self.menu_index + len - 1) % len;
    }

    pub fn selected_menu_item(&self) -> ProfileMenuItem {
        ProfileMenuItem::ALL[self.menu_index % ProfileMenuItem::ALL.len()]
    }

    pub fn next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % QuickAction::ALL.len();
    }

    pub fn prev_action(&mut self) {
        let len = QuickAction::ALL.len();
        self.selected_action = (self.selected_action + len - 1) % len;
    }

    pub fn selected_action(&self) -> QuickAction {
        QuickAction::ALL[self.selected_action % QuickAction::ALL.len()]
    }
}
