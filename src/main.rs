//! Demo binary: mounts the dashboard and registration views over the stock
//! catalog and walks through a short scripted session, logging every state
//! change. Hosts embedding the library wire their own adapters instead.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use health_dashboard::adapters::{LoggingRegistrationService, LoggingSignals};
use health_dashboard::application::{DashboardData, DashboardView, RegisterView};
use health_dashboard::config::AppConfig;
use health_dashboard::domain::catalog::{
    DietPlan, Goal, HealthMetric, MetricValue, NearbyService, QuickAccessItem, Trend, UserProfile,
    WorkoutPlan,
};
use health_dashboard::domain::foundation::{
    GoalId, MetricId, MetricStatus, PlanId, Progress, ServiceId, TrendDirection,
};
use health_dashboard::domain::view_state::{GoalTab, PlanTab, RegistrationField};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone())),
        )
        .init();

    info!("starting health dashboard demo");

    let sink = Arc::new(LoggingSignals);
    let mut dashboard = DashboardView::new(
        stock_catalog()?,
        config.ui.initial_unread_notifications,
        sink.clone(),
    );

    info!("{}", dashboard.greeting());
    info!(unread = dashboard.unread_notifications(), "mounted");

    for metric in dashboard.metrics() {
        info!(
            metric = %metric.title,
            value = %metric.value_display(),
            status = %metric.status,
            "health metric"
        );
    }

    dashboard.select_goal_tab(GoalTab::MuscleGain);
    if let Some(goal) = dashboard.active_goal() {
        info!(
            goal = %goal.name,
            target = %goal.target,
            progress = %goal.progress,
            tier = ?goal.progress.tier(),
            starts = %goal.start_date_display(),
            ends = %goal.end_date_display(),
            "active goal"
        );
    }
    dashboard.request_edit_goal();

    dashboard.select_plan_tab(PlanTab::Diet);
    dashboard.toggle_diet_details(PlanId::new("dp2")?);
    if let Some(plan) = dashboard.expanded_diet_plan() {
        info!(plan = %plan.title, calories = %plan.calories, "expanded diet plan");
        for outlet in dashboard.nearby_food_outlets() {
            info!(name = %outlet.name, distance = %outlet.distance, "nearby food outlet");
        }
    }

    dashboard.acknowledge_notifications();
    info!(unread = dashboard.unread_notifications(), "after acknowledgement");

    dashboard.activate_quick_access("schedule-workout");

    // Registration walkthrough against the accept-everything backend.
    let mut register = RegisterView::new(Arc::new(LoggingRegistrationService), sink);
    register.set_field(RegistrationField::FirstName, "John");
    register.set_field(RegistrationField::LastName, "Doe");
    register.set_field(RegistrationField::Email, "john.doe@example.com");
    register.set_field(RegistrationField::Password, "longenough1");
    register.set_field(RegistrationField::ConfirmPassword, "longenough1");
    let outcome = register.submit().await;
    info!(?outcome, "registration submit finished");

    Ok(())
}

/// The stock catalog a host gets when it supplies nothing of its own.
fn stock_catalog() -> Result<DashboardData, Box<dyn Error>> {
    Ok(DashboardData {
        user: UserProfile {
            name: "John Doe".to_string(),
            email: Some("john.doe@example.com".to_string()),
            avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=John".to_string()),
        },
        goals: stock_goals()?,
        metrics: stock_metrics()?,
        workout_plans: stock_workout_plans()?,
        diet_plans: stock_diet_plans()?,
        nearby_gyms: vec![
            nearby("gym1", "FitZone", "0.8 miles", 4.7, "123 Fitness Ave")?,
            nearby("gym2", "PowerHouse Gym", "1.2 miles", 4.5, "456 Strength Blvd")?,
            nearby("gym3", "HealthHub", "1.5 miles", 4.3, "789 Wellness St")?,
        ],
        nearby_food_outlets: vec![
            nearby("food1", "Green Plate", "0.5 miles", 4.6, "101 Nutrition Ave")?,
            nearby("food2", "Protein Paradise", "0.9 miles", 4.4, "202 Healthy Blvd")?,
            nearby("food3", "Fresh Fuel", "1.3 miles", 4.2, "303 Organic St")?,
        ],
        quick_access: vec![
            quick("find-gyms", "Find Gyms", "Discover gyms near you"),
            quick("order-meals", "Order Meals", "Healthy food delivery"),
            quick(
                "schedule-workout",
                "Schedule Workout",
                "Plan your exercise routine",
            ),
            quick("health-records", "Health Records", "Access your medical data"),
        ],
        goal_tab_map: HashMap::from([
            (GoalTab::WeightLoss, GoalId::new("1")?),
            (GoalTab::MuscleGain, GoalId::new("2")?),
            (GoalTab::GeneralFitness, GoalId::new("3")?),
            (GoalTab::Custom, GoalId::new("4")?),
        ]),
    })
}

fn stock_goals() -> Result<Vec<Goal>, Box<dyn Error>> {
    Ok(vec![
        Goal {
            id: GoalId::new("1")?,
            name: "Weight Loss".to_string(),
            progress: Progress::new(65),
            target: "Lose 10kg".to_string(),
            start_date: ymd(2023, 1, 1),
            end_date: ymd(2023, 6, 30),
            description: "Reduce body weight through diet and exercise".to_string(),
        },
        Goal {
            id: GoalId::new("2")?,
            name: "Muscle Gain".to_string(),
            progress: Progress::new(40),
            target: "Gain 5kg muscle mass".to_string(),
            start_date: ymd(2023, 1, 15),
            end_date: ymd(2023, 7, 15),
            description: "Increase muscle mass through strength training".to_string(),
        },
        Goal {
            id: GoalId::new("3")?,
            name: "General Fitness".to_string(),
            progress: Progress::new(80),
            target: "Exercise 5 days/week".to_string(),
            start_date: ymd(2023, 2, 1),
            end_date: ymd(2023, 5, 31),
            description: "Maintain overall fitness with regular exercise".to_string(),
        },
        Goal {
            id: GoalId::new("4")?,
            name: "Custom Goal".to_string(),
            progress: Progress::new(25),
            target: "Run a marathon".to_string(),
            start_date: ymd(2023, 3, 1),
            end_date: ymd(2023, 12, 31),
            description: "Train for and complete a full marathon".to_string(),
        },
    ])
}

fn stock_metrics() -> Result<Vec<HealthMetric>, Box<dyn Error>> {
    Ok(vec![
        HealthMetric {
            id: MetricId::new("bmi")?,
            title: "BMI".to_string(),
            value: MetricValue::Number(22.5),
            unit: None,
            status: MetricStatus::Good,
            description: "Body Mass Index".to_string(),
            trend: Some(Trend {
                direction: TrendDirection::Stable,
                magnitude: None,
            }),
            range: Some("18.5 - 24.9".to_string()),
        },
        HealthMetric {
            id: MetricId::new("body-fat")?,
            title: "Body Fat %".to_string(),
            value: MetricValue::Number(18.0),
            unit: Some("%".to_string()),
            status: MetricStatus::Good,
            description: "Body fat percentage".to_string(),
            trend: Some(Trend {
                direction: TrendDirection::Down,
                magnitude: Some("2%".to_string()),
            }),
            range: Some("14% - 20%".to_string()),
        },
        HealthMetric {
            id: MetricId::new("heart-rate")?,
            title: "Resting HR".to_string(),
            value: MetricValue::Number(68.0),
            unit: Some("bpm".to_string()),
            status: MetricStatus::Good,
            description: "Resting heart rate".to_string(),
            trend: Some(Trend {
                direction: TrendDirection::Stable,
                magnitude: None,
            }),
            range: Some("60 - 80 bpm".to_string()),
        },
        HealthMetric {
            id: MetricId::new("blood-pressure")?,
            title: "Blood Pressure".to_string(),
            value: MetricValue::Text("120/80".to_string()),
            unit: Some("mmHg".to_string()),
            status: MetricStatus::Good,
            description: "Systolic/Diastolic pressure".to_string(),
            trend: Some(Trend {
                direction: TrendDirection::Stable,
                magnitude: None,
            }),
            range: Some("< 120/80".to_string()),
        },
    ])
}

fn stock_workout_plans() -> Result<Vec<WorkoutPlan>, Box<dyn Error>> {
    Ok(vec![
        WorkoutPlan {
            id: PlanId::new("wp1")?,
            title: "Weight Loss Program".to_string(),
            description: "High intensity interval training to maximize calorie burn".to_string(),
            duration: "30 mins daily".to_string(),
            difficulty: "Moderate".to_string(),
            details: "This program focuses on short bursts of intense activity followed by \
                      brief rest periods. Includes cardio exercises like jumping jacks, \
                      burpees, and mountain climbers to elevate heart rate and burn calories \
                      efficiently."
                .to_string(),
        },
        WorkoutPlan {
            id: PlanId::new("wp2")?,
            title: "Muscle Building Routine".to_string(),
            description: "Progressive resistance training for muscle growth".to_string(),
            duration: "45 mins, 4x weekly".to_string(),
            difficulty: "Advanced".to_string(),
            details: "Targets major muscle groups with compound exercises like squats, \
                      deadlifts, and bench press. Focuses on progressive overload to \
                      stimulate muscle growth and strength development."
                .to_string(),
        },
        WorkoutPlan {
            id: PlanId::new("wp3")?,
            title: "General Fitness Plan".to_string(),
            description: "Balanced workout routine for overall health".to_string(),
            duration: "40 mins, 3x weekly".to_string(),
            difficulty: "Beginner".to_string(),
            details: "Combines light cardio, basic strength training, and flexibility \
                      exercises. Perfect for maintaining general health and fitness without \
                      specializing in any particular area."
                .to_string(),
        },
    ])
}

fn stock_diet_plans() -> Result<Vec<DietPlan>, Box<dyn Error>> {
    Ok(vec![
        DietPlan {
            id: PlanId::new("dp1")?,
            title: "Calorie Deficit Diet".to_string(),
            description: "Balanced nutrition with reduced calories for weight loss".to_string(),
            calories: "1800 cal/day".to_string(),
            restrictions: vec!["Low sugar".to_string(), "Moderate carbs".to_string()],
            details: "Focuses on high-protein, moderate-fat, and controlled carbohydrate \
                      intake. Emphasizes whole foods, lean proteins, and plenty of vegetables \
                      while limiting processed foods and added sugars."
                .to_string(),
        },
        DietPlan {
            id: PlanId::new("dp2")?,
            title: "High Protein Plan".to_string(),
            description: "Protein-rich diet to support muscle growth".to_string(),
            calories: "2500 cal/day".to_string(),
            restrictions: vec!["High protein".to_string(), "Moderate fat".to_string()],
            details: "Designed to provide adequate protein for muscle repair and growth. \
                      Includes lean meats, eggs, dairy, legumes, and protein supplements, \
                      balanced with complex carbohydrates for energy."
                .to_string(),
        },
        DietPlan {
            id: PlanId::new("dp3")?,
            title: "Balanced Nutrition Plan".to_string(),
            description: "Well-rounded diet for overall health maintenance".to_string(),
            calories: "2000 cal/day".to_string(),
            restrictions: vec!["Balanced macros".to_string()],
            details: "Provides a balanced intake of all macronutrients with emphasis on \
                      whole, unprocessed foods. Includes a variety of fruits, vegetables, \
                      whole grains, lean proteins, and healthy fats."
                .to_string(),
        },
    ])
}

fn nearby(
    id: &str,
    name: &str,
    distance: &str,
    rating: f64,
    address: &str,
) -> Result<NearbyService, Box<dyn Error>> {
    Ok(NearbyService {
        id: ServiceId::new(id)?,
        name: name.to_string(),
        distance: distance.to_string(),
        rating,
        address: address.to_string(),
    })
}

fn quick(id: &str, title: &str, description: &str) -> QuickAccessItem {
    QuickAccessItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
