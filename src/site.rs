// src/site.rs
//! Static clinic content rendered by the page shell.

pub const CLINIC_NAME: &str = "Barocheok Pain Clinic";
pub const CLINIC_ADDRESS: &str = "11 Seongbuk-ro, Seongbuk-gu, Seoul";
pub const CLINIC_PHONE: &str = "02-123-4567";

pub const BANNER: (&str, &str) = (
    "Care that puts patients first",
    "Specialists in every field, working together",
);

pub struct ScheduleRow {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const WEEKLY_SCHEDULE: &[ScheduleRow] = &[
    ScheduleRow {
        days: "Mon, Tue, Thu, Fri",
        hours: "09:00 - 16:00",
    },
    ScheduleRow {
        days: "Wed, Sat",
        hours: "09:00 - 13:00",
    },
    ScheduleRow {
        days: "Lunch break",
        hours: "13:00 - 14:00",
    },
    ScheduleRow {
        days: "Sundays / public holidays",
        hours: "Closed",
    },
];

pub const PRACTICE_NOTES: &[&str] = &[
    "* The clinic is closed on public holidays.",
    "* In an emergency, call us and we will help as best we can.",
];

pub const TREATMENT_AREAS: &[(&str, &str)] = &[
    ("Spine", "Neck and lower back pain, disc conditions"),
    ("Joints", "Shoulder, knee and hip pain"),
    ("Nerves", "Neuralgia, post-herpetic pain, headaches"),
];
