use quadboard_core::{Board, BoardView, GatewayResult, Priority, Task, TaskForm, TodoGateway, UserId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Gateway double that only counts calls.
#[derive(Default)]
struct CountingGateway {
    writes: AtomicUsize,
}

impl TodoGateway for CountingGateway {
    fn add_todo(&self, _user: &UserId, _todo: &Task) -> GatewayResult<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn mark_todo(&self, _user: &UserId, _todo: &Task) -> GatewayResult<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn delete_todo(&self, _user: &UserId, _todo: &Task) -> GatewayResult<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

fn board() -> (Board<CountingGateway>, Arc<CountingGateway>) {
    let gateway = Arc::new(CountingGateway::default());
    let board = Board::new(UserId::new("tester"), Arc::clone(&gateway));
    (board, gateway)
}

fn form(content: &str) -> TaskForm {
    TaskForm {
        content: content.to_string(),
        duration_minutes: 20,
        schedule: String::new(),
        is_schedule: false,
    }
}

#[test]
fn board_starts_with_four_empty_quadrants_in_reading_order() {
    let (board, _) = board();

    let priorities: Vec<Priority> = board
        .quadrants()
        .iter()
        .map(|quadrant| quadrant.priority())
        .collect();
    assert_eq!(priorities, Priority::ALL);
    assert!(board.quadrants().iter().all(|quadrant| quadrant.is_empty()));
}

#[test]
fn quadrants_do_not_share_list_state() {
    let (mut board, _) = board();

    board
        .quadrant_mut(Priority::UrgentImportant)
        .add(&form("urgent thing"));

    assert_eq!(board.quadrant(Priority::UrgentImportant).len(), 1);
    for priority in [
        Priority::ImportantNotUrgent,
        Priority::UrgentNotImportant,
        Priority::NeitherUrgentNorImportant,
    ] {
        assert!(board.quadrant(priority).is_empty());
    }
}

#[test]
fn form_submission_adds_and_closes_the_modal() {
    let (mut board, gateway) = board();
    let quadrant = board.quadrant_mut(Priority::ImportantNotUrgent);

    quadrant.open_modal();
    assert!(quadrant.is_modal_open());

    form("book flights").submit(quadrant);

    assert!(!quadrant.is_modal_open());
    assert_eq!(quadrant.len(), 1);
    assert_eq!(gateway.writes.load(Ordering::Relaxed), 1);
}

#[test]
fn modal_state_is_quadrant_scoped() {
    let (mut board, _) = board();

    board.quadrant_mut(Priority::UrgentImportant).open_modal();

    assert!(board.quadrant(Priority::UrgentImportant).is_modal_open());
    assert!(!board.quadrant(Priority::ImportantNotUrgent).is_modal_open());
}

#[test]
fn view_toggle_flips_between_tasks_and_timer() {
    let (mut board, _) = board();
    assert_eq!(board.view(), BoardView::Tasks);

    board.toggle_view();
    assert_eq!(board.view(), BoardView::Timer);

    board.toggle_view();
    assert_eq!(board.view(), BoardView::Tasks);
}

#[test]
fn per_quadrant_ids_are_independent() {
    let (mut board, _) = board();

    board
        .quadrant_mut(Priority::UrgentImportant)
        .add(&form("one"));
    board
        .quadrant_mut(Priority::NeitherUrgentNorImportant)
        .add(&form("other"));

    assert_eq!(board.quadrant(Priority::UrgentImportant).tasks()[0].id, "1");
    assert_eq!(
        board.quadrant(Priority::NeitherUrgentNorImportant).tasks()[0].id,
        "1"
    );
}
