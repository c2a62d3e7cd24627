use super::model;
use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;

/// Состояние блока деталей одного заказа.
///
/// Состояние хранится явно, а не в содержимом DOM-узла: это убирает
/// гонку «скрыли, пока ответ в пути» — поздний ответ отбрасывается
/// по несовпадению токена запроса.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Hidden,
    Loading { token: u64 },
    Shown(Order),
}

/// What a toggle does from the given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Load,
    Hide,
}

/// Переход по клику: из скрытого состояния — загрузка, из любого
/// другого — скрытие (без сетевой активности)
pub fn next_on_toggle(state: &DetailsState) -> ToggleAction {
    match state {
        DetailsState::Hidden => ToggleAction::Load,
        DetailsState::Loading { .. } | DetailsState::Shown(_) => ToggleAction::Hide,
    }
}

/// Принимается только ответ того запроса, который всё ещё ожидается
pub fn accepts_response(state: &DetailsState, token: u64) -> bool {
    matches!(state, DetailsState::Loading { token: t } if *t == token)
}

/// ViewModel for the order details toggle
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    order_id: i64,
    pub state: RwSignal<DetailsState>,
    pub error: RwSignal<Option<String>>,
    token: RwSignal<u64>,
}

impl OrderDetailsViewModel {
    pub fn new(order_id: i64) -> Self {
        Self {
            order_id,
            state: RwSignal::new(DetailsState::Hidden),
            error: RwSignal::new(None),
            token: RwSignal::new(0),
        }
    }

    /// Toggle between hidden and shown.
    ///
    /// First reveal issues exactly one request and renders the result;
    /// hiding clears without network activity. Hiding while the fetch
    /// is in flight cancels the reveal.
    pub fn toggle(&self) {
        match next_on_toggle(&self.state.get_untracked()) {
            ToggleAction::Hide => {
                self.state.set(DetailsState::Hidden);
            }
            ToggleAction::Load => {
                let token = self.token.get_untracked() + 1;
                self.token.set(token);
                self.error.set(None);
                self.state.set(DetailsState::Loading { token });

                let this = *self;
                leptos::task::spawn_local(async move {
                    match model::fetch_by_id(this.order_id).await {
                        Ok(order) => {
                            if accepts_response(&this.state.get_untracked(), token) {
                                this.state.set(DetailsState::Shown(order));
                            }
                        }
                        Err(e) => {
                            if accepts_response(&this.state.get_untracked(), token) {
                                this.error.set(Some(e));
                                this.state.set(DetailsState::Hidden);
                            }
                        }
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn shown_state() -> DetailsState {
        DetailsState::Shown(Order {
            order_id: Some(contracts::domain::a001_order::aggregate::OrderId::new(1)),
            items: "Tea".to_string(),
            local_d: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            local_t: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            quantity: 5,
            on_hand: true,
        })
    }

    #[test]
    fn test_toggle_from_hidden_loads() {
        assert_eq!(next_on_toggle(&DetailsState::Hidden), ToggleAction::Load);
    }

    #[test]
    fn test_toggle_from_shown_hides_without_network() {
        assert_eq!(next_on_toggle(&shown_state()), ToggleAction::Hide);
    }

    #[test]
    fn test_toggle_while_loading_cancels() {
        assert_eq!(
            next_on_toggle(&DetailsState::Loading { token: 3 }),
            ToggleAction::Hide
        );
    }

    #[test]
    fn test_response_accepted_only_for_pending_token() {
        assert!(accepts_response(&DetailsState::Loading { token: 3 }, 3));
        // Ответ устаревшего запроса
        assert!(!accepts_response(&DetailsState::Loading { token: 4 }, 3));
        // Деталь скрыли до прихода ответа
        assert!(!accepts_response(&DetailsState::Hidden, 3));
        assert!(!accepts_response(&shown_state(), 3));
    }
}
