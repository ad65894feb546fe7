//! Document expiry rollup
//!
//! Groups a document snapshot by category and tallies the derived expiry
//! status of each document. Pure: takes an explicit `now` like the
//! classifier it builds on.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::document::{Document, DocumentCategory};
use crate::services::status_classifier::{
    classify_by_expiry, ExpiryStatus, DOCUMENT_WARNING_WINDOW_DAYS,
};
use crate::services::StatsError;

/// Per-status counts within one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// Rollup entry for one document category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub total: usize,
    pub by_status: StatusTally,
}

/// Group documents by category and classify each one with the 30-day
/// window. The result contains exactly the categories present in the
/// input, no more. Insertion order is irrelevant; only counts matter.
///
/// Whether a category requires an associated vehicle or driver is the
/// input layer's concern and deliberately not enforced here.
pub fn rollup_by_category(
    documents: &[Document],
    now: DateTime<Utc>,
) -> Result<HashMap<DocumentCategory, CategoryRollup>, StatsError> {
    let mut rollup: HashMap<DocumentCategory, CategoryRollup> = HashMap::new();

    for document in documents {
        let category = DocumentCategory::parse(&document.category)
            .ok_or_else(|| StatsError::InvalidDocumentCategory(document.category.clone()))?;

        let entry = rollup.entry(category).or_default();
        entry.total += 1;
        match classify_by_expiry(document.expiry_date, now, DOCUMENT_WARNING_WINDOW_DAYS) {
            ExpiryStatus::Active => entry.by_status.active += 1,
            ExpiryStatus::ExpiringSoon => entry.by_status.expiring_soon += 1,
            ExpiryStatus::Expired => entry.by_status.expired += 1,
        }
    }

    Ok(rollup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn document(category: &str, expiry: Option<DateTime<Utc>>) -> Document {
        Document {
            id: Uuid::new_v4(),
            category: category.to_string(),
            title: "doc".to_string(),
            vehicle_id: None,
            driver_id: None,
            expiry_date: expiry,
            created_at: now(),
        }
    }

    #[test]
    fn test_rollup_contains_exactly_the_input_categories() {
        let docs = vec![
            document("insurance", Some(now() + Duration::days(60))),
            document("insurance", Some(now() - Duration::days(1))),
            document("driver_licence", Some(now() + Duration::days(5))),
        ];

        let rollup = rollup_by_category(&docs, now()).unwrap();
        assert_eq!(rollup.len(), 2);

        let insurance = &rollup[&DocumentCategory::Insurance];
        assert_eq!(insurance.total, 2);
        assert_eq!(insurance.by_status.active, 1);
        assert_eq!(insurance.by_status.expired, 1);

        let licences = &rollup[&DocumentCategory::DriverLicence];
        assert_eq!(licences.total, 1);
        assert_eq!(licences.by_status.expiring_soon, 1);
    }

    #[test]
    fn test_missing_expiry_counts_as_active() {
        let docs = vec![document("receipts", None)];
        let rollup = rollup_by_category(&docs, now()).unwrap();
        assert_eq!(rollup[&DocumentCategory::Receipts].by_status.active, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let rollup = rollup_by_category(&[], now()).unwrap();
        assert!(rollup.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let docs = vec![document("parking_ticket", None)];
        let err = rollup_by_category(&docs, now()).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidDocumentCategory("parking_ticket".to_string())
        );
    }

    #[test]
    fn test_totals_match_status_sums() {
        let docs = vec![
            document("transit_permit", Some(now() + Duration::days(2))),
            document("transit_permit", Some(now() + Duration::days(90))),
            document("transit_permit", None),
            document("transit_permit", Some(now() - Duration::days(30))),
        ];
        let rollup = rollup_by_category(&docs, now()).unwrap();
        let entry = &rollup[&DocumentCategory::TransitPermit];
        assert_eq!(
            entry.total,
            entry.by_status.active + entry.by_status.expiring_soon + entry.by_status.expired
        );
    }
}
