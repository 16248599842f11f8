use super::models::Announcement;

/// How many notices the modal may show up front.
pub const MAX_PROACTIVE_NOTICES: usize = 3;

/// Earliest closures first, at most three. Records without a usable
/// closure date are dropped. `sort_by_key` is stable, so equal dates keep
/// their input order.
pub fn select(announcements: &[Announcement]) -> Vec<Announcement> {
    let mut dated: Vec<&Announcement> = announcements
        .iter()
        .filter(|a| a.applied_date.is_some())
        .collect();

    dated.sort_by_key(|a| a.applied_date);

    dated
        .into_iter()
        .take(MAX_PROACTIVE_NOTICES)
        .cloned()
        .collect()
}
