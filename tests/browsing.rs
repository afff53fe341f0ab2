//! End-to-end browsing scenarios driven through `handle_event` with a
//! simulated clock standing in for Zellij's timers.

use std::time::Duration;

use jobboard::app::paginator::PageToken;
use jobboard::app::timers::{TimerQueue, AUTOPLAY_INTERVAL, DOT_COOLDOWN, FADE_DURATION};
use jobboard::app::Focus;
use jobboard::catalog::{CatalogSource, JsonCatalog};
use jobboard::domain::{Catalog, JobId};
use jobboard::ui::layout::{self, PageTarget, ScreenLayout};
use jobboard::worker::WorkerResponse;
use jobboard::{handle_event, initialize, Action, AppState, Config, Event};

struct Board {
    state: AppState,
    timers: TimerQueue,
    now: Duration,
    closed: bool,
    posted: usize,
}

impl Board {
    fn with_catalog(catalog: Catalog) -> Self {
        let mut board = Self {
            state: initialize(&Config::default()),
            timers: TimerQueue::default(),
            now: Duration::ZERO,
            closed: false,
            posted: 0,
        };
        board.send(Event::Resize { rows: 40, cols: 120 });
        board.send(Event::WorkerResponse(WorkerResponse::CatalogLoaded { catalog, loaded_at: 0 }));
        board
    }

    fn embedded() -> Self {
        Self::with_catalog(JsonCatalog::embedded().unwrap().snapshot().unwrap())
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            match action {
                Action::ScheduleTimer { id, after } => self.timers.schedule(id, self.now, after),
                Action::CancelTimer(id) => self.timers.cancel(id),
                Action::PostToWorker(_) => self.posted += 1,
                Action::CloseFocus => self.closed = true,
            }
        }
        render
    }

    fn type_company(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }

    /// Moves the clock forward, firing every timer that comes due on the way.
    fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let Some(next) = self.timers.next_deadline().filter(|deadline| *deadline <= target) else {
                break;
            };
            self.now = next;
            for id in self.timers.take_due(self.now) {
                self.send(Event::TimerFired(id));
            }
        }
        self.now = target;
    }

    fn settle(&mut self) {
        self.advance(FADE_DURATION * 2);
    }

    fn visible_companies(&self) -> Vec<String> {
        self.state
            .current_page_jobs()
            .iter()
            .map(|job| job.company_name.clone())
            .collect()
    }

    fn current_slide(&self) -> Option<usize> {
        self.state.modal.carousel().map(jobboard::app::modal::Carousel::current)
    }
}

fn catalog_with_description(description: &str) -> Catalog {
    let json = serde_json::json!({
        "jobList": [{
            "companyName": "Verbose Ltd",
            "jobTitle": "Writer",
            "educationId": 1,
            "salaryId": 1,
            "description": description,
        }]
    });
    JsonCatalog::from_json(&json.to_string()).unwrap().snapshot().unwrap()
}

fn generated_catalog(count: usize) -> Catalog {
    let jobs: Vec<String> = (0..count)
        .map(|i| format!(r#"{{ "companyName": "Firm {i}", "jobTitle": "Role", "educationId": 1, "salaryId": 1 }}"#))
        .collect();
    let json = format!(r#"{{ "jobList": [{}] }}"#, jobs.join(","));
    JsonCatalog::from_json(&json).unwrap().snapshot().unwrap()
}

#[test]
fn search_applies_after_fade_out() {
    let mut board = Board::embedded();
    board.type_company("Tech");

    assert!(board.send(Event::Submit));
    assert_eq!(board.visible_companies().len(), 6);

    board.advance(FADE_DURATION);
    assert_eq!(board.visible_companies(), ["TechCorp", "BioTech"]);

    board.settle();
    assert!(board.state.list_fade.is_settled());
    assert!(board.state.page_bar_fade.is_settled());
    assert!(board.timers.is_empty());
}

#[test]
fn thirteen_jobs_paginate_into_three_pages() {
    let mut board = Board::embedded();

    assert_eq!(board.state.page_count(), 3);
    board.send(Event::GoToPage(3));
    board.settle();

    assert_eq!(board.state.page.current(), 3);
    assert_eq!(board.visible_companies(), ["Wonka Industries"]);
}

#[test]
fn out_of_range_page_requests_do_nothing() {
    let mut board = Board::embedded();

    assert!(!board.send(Event::GoToPage(0)));
    assert!(!board.send(Event::GoToPage(4)));
    assert!(!board.send(Event::GoToPage(1)));
    assert!(board.timers.is_empty());
    assert!(board.state.list_fade.is_settled());
}

#[test]
fn rapid_paging_lands_on_the_last_request() {
    let mut board = Board::embedded();
    board.send(Event::FocusPrev);
    assert_eq!(board.state.focus, Focus::Results);

    board.send(Event::Step { forward: true });
    board.advance(FADE_DURATION / 2);
    board.send(Event::Step { forward: true });
    assert_eq!(board.state.page.current(), 1);

    board.settle();
    assert_eq!(board.state.page.current(), 3);
    assert_eq!(board.state.selected_index, 0);
}

#[test]
fn stale_fade_timers_are_ignored() {
    let mut board = Board::embedded();
    board.send(Event::GoToPage(2));
    let stale = board.state.list_fade.timer();
    board.send(Event::GoToPage(3));

    assert!(!board.send(Event::TimerFired(stale)));
    assert_eq!(board.state.page.current(), 1);

    board.settle();
    assert_eq!(board.state.page.current(), 3);
}

#[test]
fn detail_modal_locks_list_until_closed() {
    let mut board = Board::embedded();
    board.send(Event::OpenJob(JobId(1)));

    assert!(board.state.modal.is_open());
    assert!(board.state.scroll_lock.is_held());
    assert!(!board.send(Event::GoToPage(2)));
    assert!(!board.send(Event::SelectNext));

    board.send(Event::Escape);
    assert!(!board.state.modal.is_open());
    assert!(!board.state.scroll_lock.is_held());
    assert!(board.send(Event::GoToPage(2)));
}

#[test]
fn carousel_autoplays_and_restarts_at_first_slide() {
    let mut board = Board::embedded();
    board.send(Event::OpenJob(JobId(1)));
    assert_eq!(board.current_slide(), Some(0));

    board.advance(AUTOPLAY_INTERVAL);
    assert_eq!(board.current_slide(), Some(1));
    board.advance(AUTOPLAY_INTERVAL);
    assert_eq!(board.current_slide(), Some(2));

    board.send(Event::CloseDetail);
    assert!(board.timers.is_empty());

    board.send(Event::OpenJob(JobId(1)));
    assert_eq!(board.current_slide(), Some(0));
}

#[test]
fn dot_jumps_respect_cooldown() {
    let mut board = Board::embedded();
    board.send(Event::OpenJob(JobId(1)));

    assert!(board.send(Event::JumpToSlide(2)));
    assert!(!board.send(Event::JumpToSlide(3)));
    assert_eq!(board.current_slide(), Some(2));

    board.advance(DOT_COOLDOWN);
    assert!(board.send(Event::JumpToSlide(3)));
    assert_eq!(board.current_slide(), Some(3));
}

#[test]
fn job_without_photos_opens_without_autoplay() {
    let mut board = Board::embedded();
    board.send(Event::OpenJob(JobId(10)));

    assert!(board.state.modal.is_open());
    assert!(board.timers.is_empty());
    let vm = board.state.compute_viewmodel(40, 120);
    let modal = vm.modal.unwrap();
    assert_eq!(modal.slide_count, 0);
    assert!(modal.slides.is_empty());
}

#[test]
fn resize_keeps_page_and_filters() {
    let mut board = Board::embedded();
    board.send(Event::Resize { rows: 40, cols: 80 });
    board.send(Event::GoToPage(4));
    board.settle();
    assert_eq!(board.state.page.current(), 4);

    board.type_company("x");
    board.send(Event::Resize { rows: 40, cols: 120 });

    assert_eq!(board.state.page.current(), 3);
    assert_eq!(board.state.filter.draft().company_name, "x");
}

#[test]
fn compact_page_bar_elides_distant_pages() {
    let mut board = Board::with_catalog(generated_catalog(40));
    board.send(Event::Resize { rows: 40, cols: 80 });
    board.send(Event::GoToPage(5));
    board.settle();

    let bar = board.state.compute_viewmodel(40, 80).page_bar.unwrap();
    let numbers: Vec<Option<u32>> = bar
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page { number, .. } => Some(*number),
            PageToken::Ellipsis => None,
        })
        .collect();
    assert_eq!(numbers, [Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]);
}

#[test]
fn no_match_shows_empty_state() {
    let mut board = Board::embedded();
    board.type_company("zzz");
    board.send(Event::Submit);
    board.settle();

    let vm = board.state.compute_viewmodel(40, 120);
    assert!(vm.cards.is_empty());
    assert!(vm.page_bar.is_none());
    assert_eq!(vm.empty_state.map(|empty| empty.message), Some("No jobs match".to_string()));
}

#[test]
fn permissions_request_catalog_once() {
    let mut board = Board {
        state: initialize(&Config::default()),
        timers: TimerQueue::default(),
        now: Duration::ZERO,
        closed: false,
        posted: 0,
    };

    board.send(Event::PermissionsResult { granted: true });
    assert_eq!(board.posted, 1);

    let catalog = generated_catalog(2);
    board.send(Event::WorkerResponse(WorkerResponse::CatalogLoaded { catalog, loaded_at: 1 }));
    board.send(Event::PermissionsResult { granted: true });
    assert_eq!(board.posted, 1);
}

#[test]
fn escape_from_results_closes_plugin() {
    let mut board = Board::embedded();
    board.send(Event::Escape);
    assert_eq!(board.state.focus, Focus::Results);
    assert!(!board.closed);

    board.send(Event::Escape);
    assert!(board.closed);
}

#[test]
fn page_bar_fits_the_pane_for_large_catalogs() {
    let mut board = Board::with_catalog(generated_catalog(360));
    board.send(Event::GoToPage(30));
    board.settle();

    let vm = board.state.compute_viewmodel(40, 120);
    let screen = ScreenLayout::compute(&vm, 40, 120);
    assert!(!screen.page_bar.is_empty());
    for cell in &screen.page_bar {
        assert!(cell.rect.col >= 1);
        assert!(cell.rect.col + cell.rect.width - 1 <= 120, "{cell:?} runs past the pane");
    }

    let last = screen.page_bar.iter().find(|cell| cell.target == PageTarget::Page(60)).unwrap();
    assert!(board.send(Event::Click { row: last.rect.row, col: last.rect.col }));
    board.settle();
    assert_eq!(board.state.page.current(), 60);

    board.send(Event::GoToPage(59));
    board.settle();
    let screen = ScreenLayout::compute(&board.state.compute_viewmodel(40, 120), 40, 120);
    let next = screen.page_bar.iter().find(|cell| cell.target == PageTarget::Next).unwrap();
    assert!(board.send(Event::Click { row: next.rect.row, col: next.rect.col }));
    board.settle();
    assert_eq!(board.state.page.current(), 60);
}

#[test]
fn long_description_scrolls_with_keys() {
    let paragraphs: String = (1..=30).map(|i| format!("<p>Paragraph {i}</p>")).collect();
    let mut board = Board::with_catalog(catalog_with_description(&paragraphs));
    board.send(Event::OpenJob(JobId(1)));

    let height = layout::modal_text_height(40);
    let visible = |board: &Board| -> Vec<String> {
        let modal = board.state.compute_viewmodel(40, 120).modal.unwrap();
        modal
            .description
            .iter()
            .skip(modal.description_offset)
            .take(height)
            .map(|line| line.plain_text())
            .collect()
    };
    assert_eq!(visible(&board).first().map(String::as_str), Some("Paragraph 1"));

    assert!(board.send(Event::Char('j')));
    assert!(board.send(Event::SelectNext));
    while board.send(Event::SelectNext) {}
    assert_eq!(visible(&board).last().map(String::as_str), Some("Paragraph 30"));

    assert!(board.send(Event::Char('k')));
    assert!(board.send(Event::SelectPrev));

    board.send(Event::CloseDetail);
    board.send(Event::OpenJob(JobId(1)));
    assert_eq!(visible(&board).first().map(String::as_str), Some("Paragraph 1"));
}

#[test]
fn failed_catalog_load_is_shown_instead_of_loading() {
    let mut board = Board {
        state: initialize(&Config::default()),
        timers: TimerQueue::default(),
        now: Duration::ZERO,
        closed: false,
        posted: 0,
    };
    board.send(Event::PermissionsResult { granted: true });

    let rendered = board.send(Event::WorkerResponse(WorkerResponse::Error {
        message: "load catalog: No such file or directory".to_string(),
    }));
    assert!(rendered);

    let empty = board.state.compute_viewmodel(40, 120).empty_state.unwrap();
    assert_eq!(empty.message, "Could not load jobs");
    assert!(empty.subtitle.contains("No such file"));
}

#[test]
fn unrequested_query_answers_change_nothing() {
    let mut board = Board::embedded();
    let page = JsonCatalog::embedded()
        .unwrap()
        .query_jobs(&jobboard::catalog::JobQuery::default())
        .unwrap();

    assert!(!board.send(Event::WorkerResponse(WorkerResponse::JobsQueried { page })));
    assert_eq!(board.visible_companies().len(), 6);
}
