// src/services/commission_service.rs

use std::collections::HashSet;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, CommissionRepository, StudentRepository},
    middleware::scope::AccessScope,
    models::{
        catalog::Course,
        commission::{Commission, CommissionStatus, CommissionSummary, GenerateReport, NewCommission},
        pipeline::Student,
    },
};

#[derive(Clone)]
pub struct CommissionService {
    repo: CommissionRepository,
    student_repo: StudentRepository,
    catalog_repo: CatalogRepository,
}

impl CommissionService {
    pub fn new(
        repo: CommissionRepository,
        student_repo: StudentRepository,
        catalog_repo: CatalogRepository,
    ) -> Self {
        Self {
            repo,
            student_repo,
            catalog_repo,
        }
    }

    pub async fn list(&self, scope: &AccessScope) -> Result<Vec<Commission>, AppError> {
        self.repo.list(scope.consultant_filter()).await
    }

    pub async fn summary(&self, scope: &AccessScope) -> Result<CommissionSummary, AppError> {
        self.repo.summary(scope.consultant_filter()).await
    }

    /// Geração em lote: uma comissão pendente para cada estudante que ainda
    /// não tem uma. Cada inserção é independente (melhor esforço): uma falha
    /// no meio não desfaz as que já foram gravadas.
    pub async fn generate(&self) -> Result<GenerateReport, AppError> {
        let students = self.student_repo.list(None).await?;
        let courses = self.catalog_repo.list_courses(None).await?;
        let covered: HashSet<Uuid> = self.repo.covered_student_ids().await?.into_iter().collect();

        let planned = plan_commissions(&students, &courses, &covered);

        let mut generated = 0u64;
        for new in &planned {
            match self.repo.insert(new).await {
                // None = outro processo cobriu o estudante entre a
                // pré-checagem e a inserção; não é erro nem duplicata.
                Ok(Some(_)) => generated += 1,
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(
                        "Falha ao gerar comissão do estudante {}: {}",
                        new.student_id,
                        e
                    );
                }
            }
        }

        tracing::info!("💰 {} novas comissões geradas.", generated);
        Ok(GenerateReport { generated })
    }

    /// pending -> paid, de mão única.
    pub async fn mark_paid(&self, id: Uuid) -> Result<Commission, AppError> {
        if let Some(commission) = self.repo.mark_paid(id).await? {
            return Ok(commission);
        }

        // Nada atualizado: ou não existe, ou já estava paga
        match self.repo.get_by_id(id).await? {
            None => Err(AppError::ReferenceNotFound("Comissão")),
            Some(c) if c.status == CommissionStatus::Paid => Err(AppError::PreconditionFailed(
                "A comissão já está marcada como paga.".into(),
            )),
            Some(_) => Err(AppError::ReferenceNotFound("Comissão")),
        }
    }
}

// --- CÁLCULO (puro, sem I/O) ---

/// commissionAmount = tuitionFee × commissionPercentage / 100,
/// em aritmética decimal exata.
pub fn commission_amount(tuition_fee: Decimal, commission_percentage: Decimal) -> Decimal {
    tuition_fee * commission_percentage / Decimal::from(100)
}

/// Decide quais estudantes recebem comissão nesta rodada:
/// pula quem já está coberto e quem aponta para um curso que não resolve.
/// Os valores são um snapshot do curso no momento da geração.
pub fn plan_commissions(
    students: &[Student],
    courses: &[Course],
    covered: &HashSet<Uuid>,
) -> Vec<NewCommission> {
    let mut planned = Vec::new();

    for student in students {
        if covered.contains(&student.id) {
            continue;
        }

        let Some(course) = courses.iter().find(|c| c.id == student.course_id) else {
            continue;
        };

        planned.push(NewCommission {
            student_id: student.id,
            application_id: student.application_id,
            consultant_id: student.assigned_consultant,
            course_id: course.id,
            tuition_fee: course.tuition_fee,
            commission_percentage: course.commission_percentage,
            commission_amount: commission_amount(course.tuition_fee, course.commission_percentage),
        });
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CourseLevel;
    use chrono::{NaiveDate, Utc};

    fn course(tuition_fee: i64, percentage: i64) -> Course {
        Course {
            id: Uuid::new_v4(),
            college_id: Uuid::new_v4(),
            university_id: Uuid::new_v4(),
            name: "MBBS".into(),
            duration: "6 years".into(),
            level: CourseLevel::Undergraduate,
            tuition_fee: Decimal::from(tuition_fee),
            application_fee: Decimal::ZERO,
            commission_percentage: Decimal::from(percentage),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn student(course: &Course, consultant: Option<Uuid>) -> Student {
        Student {
            id: Uuid::new_v4(),
            application_id: Uuid::new_v4(),
            lead_id: Uuid::new_v4(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "+1234567890".into(),
            university_id: course.university_id,
            college_id: course.college_id,
            course_id: course.id,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            expected_graduation: NaiveDate::from_ymd_opt(2030, 6, 30).unwrap(),
            documents: vec![],
            assigned_consultant: consultant,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn amount_is_exact() {
        // 50000 a 10% rende exatamente 5000
        assert_eq!(
            commission_amount(Decimal::from(50000), Decimal::from(10)),
            Decimal::from(5000)
        );
    }

    #[test]
    fn plan_snapshots_course_values() {
        let c = course(50000, 10);
        let s = student(&c, None);
        let planned = plan_commissions(&[s.clone()], &[c.clone()], &HashSet::new());

        assert_eq!(planned.len(), 1);
        let new = &planned[0];
        assert_eq!(new.student_id, s.id);
        assert_eq!(new.application_id, s.application_id);
        assert_eq!(new.course_id, c.id);
        assert_eq!(new.tuition_fee, Decimal::from(50000));
        assert_eq!(new.commission_percentage, Decimal::from(10));
        assert_eq!(new.commission_amount, Decimal::from(5000));
    }

    #[test]
    fn covered_students_are_skipped() {
        let c = course(50000, 10);
        let s1 = student(&c, None);
        let s2 = student(&c, None);
        let students = [s1.clone(), s2.clone()];

        // Primeira rodada cobre todo mundo
        let first = plan_commissions(&students, &[c.clone()], &HashSet::new());
        assert_eq!(first.len(), 2);

        // Segunda rodada, com os mesmos estudantes já cobertos, não gera nada
        let covered: HashSet<Uuid> = first.iter().map(|n| n.student_id).collect();
        let second = plan_commissions(&students, &[c], &covered);
        assert!(second.is_empty());
    }

    #[test]
    fn unresolved_course_is_skipped() {
        let c = course(50000, 10);
        let orphan = student(&course(1, 1), None); // curso não está na lista
        let ok = student(&c, None);

        let planned = plan_commissions(&[orphan, ok.clone()], &[c], &HashSet::new());
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].student_id, ok.id);
    }

    #[test]
    fn consultant_is_carried_from_student() {
        let c = course(30000, 15);
        let consultant = Uuid::new_v4();
        let s = student(&c, Some(consultant));

        let planned = plan_commissions(&[s], &[c], &HashSet::new());
        assert_eq!(planned[0].consultant_id, Some(consultant));
        assert_eq!(planned[0].commission_amount, Decimal::from(4500));
    }

    #[test]
    fn fractional_percentage_stays_decimal() {
        // 20000 a 2.5% = 500, sem erro de ponto flutuante
        let fee = Decimal::from(20000);
        let pct = Decimal::new(25, 1); // 2.5
        assert_eq!(commission_amount(fee, pct), Decimal::from(500));
    }
}
