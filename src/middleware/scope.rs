// src/middleware/scope.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{User, UserRole},
};

// O escopo de visibilidade da requisição, derivado do usuário autenticado.
// É passado explicitamente para os serviços/repositórios em vez de um
// estado global de sessão: quem filtra recebe o escopo como argumento.
#[derive(Debug, Clone)]
pub enum AccessScope {
    /// super_admin: sem restrição
    Full,
    /// consultor: restrito às universidades atribuídas e aos próprios leads
    Consultant {
        consultant_id: Uuid,
        university_ids: Vec<Uuid>,
    },
}

impl AccessScope {
    pub fn for_user(user: &User) -> Self {
        match user.role {
            UserRole::SuperAdmin => AccessScope::Full,
            UserRole::Consultant => AccessScope::Consultant {
                consultant_id: user.id,
                university_ids: user.assigned_university_ids.clone(),
            },
        }
    }

    /// `None` = sem filtro; `Some(ids)` = apenas estas universidades.
    /// Lista vazia significa "nenhuma", nunca "todas".
    pub fn university_filter(&self) -> Option<&[Uuid]> {
        match self {
            AccessScope::Full => None,
            AccessScope::Consultant { university_ids, .. } => Some(university_ids),
        }
    }

    /// `Some(id)` quando leads/comissões devem ser filtrados por consultor.
    pub fn consultant_filter(&self) -> Option<Uuid> {
        match self {
            AccessScope::Full => None,
            AccessScope::Consultant { consultant_id, .. } => Some(*consultant_id),
        }
    }

    pub fn can_see_university(&self, university_id: Uuid) -> bool {
        match self.university_filter() {
            None => true,
            Some(ids) => ids.contains(&university_id),
        }
    }

    /// Consultores só enxergam/editam leads atribuídos a eles.
    pub fn can_access_lead(&self, assigned_consultant: Option<Uuid>) -> bool {
        match self.consultant_filter() {
            None => true,
            Some(id) => assigned_consultant == Some(id),
        }
    }

    /// Ao criar um lead/application, o consultor carimba a si próprio.
    pub fn stamped_consultant(&self) -> Option<Uuid> {
        self.consultant_filter()
    }
}

impl<S> FromRequestParts<S> for AccessScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<User>().ok_or(AppError::InvalidToken)?;
        Ok(AccessScope::for_user(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultant_scope(unis: Vec<Uuid>) -> AccessScope {
        AccessScope::Consultant {
            consultant_id: Uuid::new_v4(),
            university_ids: unis,
        }
    }

    #[test]
    fn full_scope_sees_everything() {
        let u = Uuid::new_v4();
        assert!(AccessScope::Full.can_see_university(u));
        assert!(AccessScope::Full.can_access_lead(None));
        assert_eq!(AccessScope::Full.university_filter(), None);
        assert_eq!(AccessScope::Full.stamped_consultant(), None);
    }

    #[test]
    fn consultant_limited_to_assigned_universities() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let scope = consultant_scope(vec![u1]);
        assert!(scope.can_see_university(u1));
        assert!(!scope.can_see_university(u2));
    }

    #[test]
    fn empty_assignment_means_nothing_not_everything() {
        let scope = consultant_scope(vec![]);
        assert_eq!(scope.university_filter().map(<[Uuid]>::len), Some(0));
        assert!(!scope.can_see_university(Uuid::new_v4()));
    }

    #[test]
    fn consultant_only_sees_own_leads() {
        let scope = consultant_scope(vec![]);
        let me = scope.consultant_filter().unwrap();
        assert!(scope.can_access_lead(Some(me)));
        assert!(!scope.can_access_lead(Some(Uuid::new_v4())));
        assert!(!scope.can_access_lead(None));
    }
}
