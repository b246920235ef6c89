//! The `ElevatorController`: owns the cars, the event log, and the screens.

use std::collections::HashMap;

use lift_car::{Elevator, ElevatorListener, Notice};
use lift_core::{ElevatorId, EventId, Floor, LiftError, LiftResult, PanelId, Tick};
use tracing::{debug, trace, warn};

use crate::{CallCommand, CallPanel, CallSink, ElevatorEvent, Screen};

/// Controls one or more cars and hands hall calls to whichever car takes them.
///
/// # Dispatch
///
/// A new event is offered to every car in registration order; the first car
/// whose [`Elevator::move_to_floor`] returns `true` claims it.  If nobody
/// takes it the event waits in the log.  Every time a car reports
/// `on_becoming_free`, all waiting events are offered again, oldest first.
/// There is no other retry.
///
/// # Screens
///
/// Any arrival, floor change, door change, or service change of a car writes
/// that car's [`Elevator::message`] to each of its screens.
#[derive(Debug, Default)]
pub struct ElevatorController {
    elevators:           Vec<Elevator>,
    screens_by_elevator: HashMap<ElevatorId, Vec<Screen>>,
    floor_by_call_panel: HashMap<PanelId, Floor>,
    /// Append-only.  An event's `EventId` is its index here.
    events:              Vec<ElevatorEvent>,
    now:                 Tick,
}

impl ElevatorController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a car.  Earlier cars take precedence during dispatch.
    pub fn add_elevator(&mut self, mut elevator: Elevator) -> LiftResult<ElevatorId> {
        let id = ElevatorId::from_index(self.elevators.len())
            .ok_or(LiftError::IdsExhausted("elevator"))?;
        elevator.attach(id);
        debug!(car = %id, floor = elevator.current_floor(), "car registered");
        self.elevators.push(elevator);
        Ok(id)
    }

    /// Show `car`'s status on `screens`, replacing any screens set before.
    pub fn add_elevator_screens(&mut self, car: ElevatorId, screens: Vec<Screen>) {
        self.screens_by_elevator.insert(car, screens);
    }

    /// Bind `panel`'s buttons to hall calls for `floor`.
    pub fn add_call_panel(&mut self, floor: Floor, panel: &mut CallPanel) {
        panel.set_click_down_command(CallCommand::Down(floor));
        panel.set_click_up_command(CallCommand::Up(floor));
        self.floor_by_call_panel.insert(panel.id(), floor);
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Append `event` to the log and try to dispatch it immediately.
    ///
    /// Fails only when the log already holds every possible `EventId`.
    pub fn add_elevator_event(&mut self, event: ElevatorEvent) -> LiftResult<EventId> {
        let id = EventId::from_index(self.events.len()).ok_or(LiftError::IdsExhausted("event"))?;
        debug!(event = %id, floor = event.floor(), direction = %event.direction(), "hall call");
        self.events.push(event);
        self.handle_event(id);
        Ok(id)
    }

    /// Offer event `id` to the cars.  Returns whether it is handled afterwards.
    fn handle_event(&mut self, id: EventId) -> bool {
        let now = self.now;
        let Some(event) = self.events.get_mut(id.index()) else {
            return false;
        };
        if event.is_handled() {
            return true;
        }

        let floor = event.floor();
        for elevator in &mut self.elevators {
            if elevator.move_to_floor(floor) {
                event.handle(elevator.id(), now);
                debug!(event = %id, car = %elevator.id(), floor, "hall call dispatched");
                return true;
            }
        }

        debug!(event = %id, floor, "no car accepted hall call; queued");
        false
    }

    /// Re-offer every unhandled event, oldest first.
    fn delegate_events(&mut self) {
        let waiting: Vec<EventId> = self.unhandled_events().map(|(id, _)| id).collect();
        for id in waiting {
            self.handle_event(id);
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every car one step, in registration order.
    ///
    /// Each car's notifications are delivered before the next car moves, so
    /// a car freed early in the tick can pick up queued calls that a later
    /// car then no longer sees.
    pub fn tick(&mut self) {
        let mut notices: Vec<Notice> = Vec::new();
        for index in 0..self.elevators.len() {
            self.elevators[index].progress(&mut notices);
            for notice in notices.drain(..) {
                notice.replay(self);
            }
        }
        self.now = self.now + 1;
    }

    // ── Car commands ──────────────────────────────────────────────────────

    /// [`Elevator::move_to_floor`] on a registered car.
    pub fn move_to_floor(&mut self, car: ElevatorId, floor: Floor) -> LiftResult<bool> {
        Ok(self.elevator_mut(car)?.move_to_floor(floor))
    }

    /// A floor button pressed inside `car`.  Wrong-direction presses are
    /// silently discarded.
    pub fn click_floor(&mut self, car: ElevatorId, floor: Floor) -> LiftResult<()> {
        self.elevator_mut(car)?.click_floor(floor);
        Ok(())
    }

    /// Take `car` out of service permanently.
    pub fn set_to_maintenance(&mut self, car: ElevatorId) -> LiftResult<()> {
        let mut notices: Vec<Notice> = Vec::new();
        self.elevator_mut(car)?.set_to_maintenance(&mut notices);
        for notice in notices {
            notice.replay(self);
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Ticks driven so far.  Also the timestamp given to new events.
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, car: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(car.index())
    }

    /// The full event log, in submission order.
    pub fn events(&self) -> &[ElevatorEvent] {
        &self.events
    }

    pub fn event(&self, id: EventId) -> Option<&ElevatorEvent> {
        self.events.get(id.index())
    }

    /// Events no car has claimed yet, oldest first.
    pub fn unhandled_events(&self) -> impl Iterator<Item = (EventId, &ElevatorEvent)> + '_ {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_handled())
            .filter_map(|(i, e)| EventId::from_index(i).map(|id| (id, e)))
    }

    /// Screens registered for `car`; empty if none.
    pub fn screens(&self, car: ElevatorId) -> &[Screen] {
        self.screens_by_elevator
            .get(&car)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn floor_of_panel(&self, panel: PanelId) -> Option<Floor> {
        self.floor_by_call_panel.get(&panel).copied()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn elevator_mut(&mut self, car: ElevatorId) -> LiftResult<&mut Elevator> {
        self.elevators
            .get_mut(car.index())
            .ok_or(LiftError::ElevatorNotFound(car))
    }

    fn update_screens(&mut self, car: ElevatorId) {
        let Some(elevator) = self.elevators.get(car.index()) else {
            return;
        };
        let Some(screens) = self.screens_by_elevator.get_mut(&car) else {
            return;
        };
        let message = elevator.message();
        for screen in screens {
            screen.set_text(message.as_str());
        }
    }
}

impl CallSink for ElevatorController {
    fn submit(&mut self, command: CallCommand) {
        let event = ElevatorEvent::new(command.direction(), command.floor(), self.now);
        if let Err(e) = self.add_elevator_event(event) {
            warn!(floor = command.floor(), error = %e, "hall call dropped");
        }
    }
}

impl ElevatorListener for ElevatorController {
    fn on_arriving_floor(&mut self, car: ElevatorId, floor: Floor) {
        trace!(car = %car, floor, "arriving");
        self.update_screens(car);
    }

    fn on_becoming_free(&mut self, car: ElevatorId) {
        trace!(car = %car, "free; redispatching queued calls");
        self.delegate_events();
    }

    fn on_change_doors(&mut self, car: ElevatorId, _floor: Floor, _doors_open: bool) {
        self.update_screens(car);
    }

    fn on_change_state(&mut self, car: ElevatorId, _operational: bool) {
        self.update_screens(car);
    }

    fn on_change_floor(&mut self, car: ElevatorId, _new_floor: Floor) {
        self.update_screens(car);
    }
}
