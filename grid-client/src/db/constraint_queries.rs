use sqlx::PgPool;

use crate::db::FetchError;
use crate::domain::{IctConstraint, TransConstraint};

const ICT_CONSTRAINTS: &str = "ICT constraints";
const TRANS_CONSTRAINTS: &str = "transmission constraints";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IctConstraintRow {
    pub ict: String,
    pub season_antecedent: Option<String>,
    pub description_constraints: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransConstraintRow {
    pub corridor: String,
    pub season_antecedent: Option<String>,
    pub description_constraints: Option<String>,
}

/// Fetch the latest published ICT constraint snapshot. Constraints are
/// published as whole snapshots, so this ignores the report range and selects
/// the rows of the most recent publication.
pub async fn fetch_ict_constraints(pool: &PgPool) -> Result<Vec<IctConstraint>, FetchError> {
    let rows = sqlx::query_as::<_, IctConstraintRow>(
        r#"
        SELECT
            ic.ict,
            ic.season_antecedent,
            ic.description_constraints
        FROM mis_warehouse.ict_constraint_data ic
        WHERE ic.start_date = (SELECT MAX(start_date) FROM mis_warehouse.ict_constraint_data)
        ORDER BY ic.ict
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(ICT_CONSTRAINTS, e))?;

    Ok(rows.into_iter().map(ict_constraint_from_row).collect())
}

/// Fetch the latest published transmission corridor constraint snapshot.
pub async fn fetch_transmission_constraints(
    pool: &PgPool,
) -> Result<Vec<TransConstraint>, FetchError> {
    let rows = sqlx::query_as::<_, TransConstraintRow>(
        r#"
        SELECT
            tc.corridor,
            tc.season_antecedent,
            tc.description_constraints
        FROM mis_warehouse.trans_constraint_data tc
        WHERE tc.start_date = (SELECT MAX(start_date) FROM mis_warehouse.trans_constraint_data)
        ORDER BY tc.corridor
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(TRANS_CONSTRAINTS, e))?;

    Ok(rows.into_iter().map(trans_constraint_from_row).collect())
}

pub(crate) fn ict_constraint_from_row(row: IctConstraintRow) -> IctConstraint {
    IctConstraint {
        ict: row.ict,
        season: row.season_antecedent.unwrap_or_default(),
        description: row.description_constraints.unwrap_or_default(),
    }
}

pub(crate) fn trans_constraint_from_row(row: TransConstraintRow) -> TransConstraint {
    TransConstraint {
        corridor: row.corridor,
        season: row.season_antecedent.unwrap_or_default(),
        description: row.description_constraints.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_season_and_description_become_empty_strings() {
        let cons = ict_constraint_from_row(IctConstraintRow {
            ict: "AGRA ICT-1".to_string(),
            season_antecedent: None,
            description_constraints: None,
        });
        assert_eq!(cons.ict, "AGRA ICT-1");
        assert_eq!(cons.season, "");
        assert_eq!(cons.description, "");
    }

    #[test]
    fn corridor_constraint_maps_all_fields() {
        let cons = trans_constraint_from_row(TransConstraintRow {
            corridor: "ER-NR".to_string(),
            season_antecedent: Some("High hydro".to_string()),
            description_constraints: Some("Limited to 6000 MW".to_string()),
        });
        assert_eq!(cons.corridor, "ER-NR");
        assert_eq!(cons.season, "High hydro");
        assert_eq!(cons.description, "Limited to 6000 MW");
    }
}
