use crate::domain::a001_order::Order;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable columns of the order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl SortField {
    pub fn all() -> [SortField; 6] {
        [
            SortField::Id,
            SortField::User,
            SortField::Project,
            SortField::Address,
            SortField::Date,
            SortField::Status,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::User => "user",
            SortField::Project => "project",
            SortField::Address => "address",
            SortField::Date => "date",
            SortField::Status => "status",
        }
    }

    pub fn header_label(&self) -> &'static str {
        match self {
            SortField::Id => "Order ID",
            SortField::User => "User",
            SortField::Project => "Project",
            SortField::Address => "Address",
            SortField::Date => "Date",
            SortField::Status => "Status",
        }
    }

    /// The value a row is ordered by in this column.
    pub fn key<'a>(&self, order: &'a Order) -> &'a str {
        match self {
            SortField::Id => order.id.as_str(),
            SortField::User => &order.user.name,
            SortField::Project => &order.project,
            SortField::Address => &order.address,
            SortField::Date => &order.date,
            SortField::Status => order.status.label(),
        }
    }

    /// Comparator strategy per column. `date` is free text, so every column is
    /// collated as a string.
    pub fn comparator(&self) -> FieldComparator {
        match self {
            SortField::Id
            | SortField::User
            | SortField::Project
            | SortField::Address
            | SortField::Date
            | SortField::Status => FieldComparator::Collated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// How two column values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldComparator {
    /// Locale-style string collation: letters compare case-insensitively
    /// first, lowercase wins a tie.
    Collated,
}

impl FieldComparator {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            FieldComparator::Collated => collate(a, b),
        }
    }
}

/// String collation close to `Intl.Collator` defaults for ASCII text.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: same field flips the direction, a new field starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_sorted_by(&self, field: SortField) -> bool {
        self.field == Some(field)
    }

    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        let Some(field) = self.field else {
            return Ordering::Equal;
        };
        let cmp = field.comparator().compare(field.key(a), field.key(b));
        match self.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    }
}

/// Stable sort; an unset field keeps the input order.
pub fn sort_orders(rows: &mut [&Order], sort: &SortState) {
    if sort.field.is_none() {
        return;
    }
    rows.sort_by(|a, b| sort.compare(a, b));
}
