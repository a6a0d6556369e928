//! Aggregate statistics, recomputed on every call.

use serde::Serialize;

use crate::catalog::model::{Category, Region, University};

/// Dataset-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_universities: usize,
    pub public_count: usize,
    pub private_count: usize,
    pub national_count: usize,
    pub azhar_count: usize,
    pub total_students: u64,
    pub average_rating: f64,
}

/// Statistics restricted to one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub region: Region,
    pub university_count: usize,
    pub total_students: u64,
    pub average_rating: f64,
    /// Mean of each university's fee midpoint, in whole currency units.
    /// Midpoints and the mean both round down.
    pub average_fees: u64,
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn whole_mean(sum: u128, count: usize) -> u64 {
    match u128::try_from(count) {
        Ok(0) | Err(_) => 0,
        Ok(count) => u64::try_from(sum / count).unwrap_or(u64::MAX),
    }
}

pub fn overall<'a>(universities: impl IntoIterator<Item = &'a University>) -> Stats {
    let mut stats = Stats {
        total_universities: 0,
        public_count: 0,
        private_count: 0,
        national_count: 0,
        azhar_count: 0,
        total_students: 0,
        average_rating: 0.0,
    };
    let mut rating_sum = 0.0;

    for uni in universities {
        stats.total_universities += 1;
        match uni.category {
            Category::Public => stats.public_count += 1,
            Category::Private => stats.private_count += 1,
            Category::National => stats.national_count += 1,
            Category::Azhar => stats.azhar_count += 1,
        }
        stats.total_students += uni.students;
        rating_sum += uni.rating;
    }

    stats.average_rating = mean(rating_sum, stats.total_universities);
    stats
}

pub fn for_region<'a>(
    universities: impl IntoIterator<Item = &'a University>,
    region: Region,
) -> RegionStats {
    let mut count = 0;
    let mut total_students = 0;
    let mut rating_sum = 0.0;
    let mut fee_sum: u128 = 0;

    for uni in universities.into_iter().filter(|u| u.region == region) {
        count += 1;
        total_students += uni.students;
        rating_sum += uni.rating;
        fee_sum += (u128::from(uni.fees.min) + u128::from(uni.fees.max)) / 2;
    }

    RegionStats {
        region,
        university_count: count,
        total_students,
        average_rating: mean(rating_sum, count),
        average_fees: whole_mean(fee_sum, count),
    }
}
