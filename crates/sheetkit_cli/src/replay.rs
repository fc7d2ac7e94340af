//! Scenario replay against a headless sheet

use std::cell::RefCell;
use std::rc::Rc;

use sheetkit::{BottomSheet, HeadlessHost, SheetConfig, SheetHost};
use sheetkit_animation::AnimationScheduler;
use sheetkit_core::{GestureOrigin, PanGesture, TapGesture};

use crate::report::{ReplayReport, StepReport};
use crate::scenario::{Scenario, ScenarioStep};

/// A headless sheet plus the scheduler that animates it
pub struct Replay {
    sheet: BottomSheet<HeadlessHost>,
    scheduler: Rc<RefCell<AnimationScheduler>>,
    frames: u64,
}

impl Replay {
    pub fn new(scenario: &Scenario, config: SheetConfig, fps: u32) -> Self {
        let scheduler = Rc::new(RefCell::new(AnimationScheduler::new()));
        scheduler.borrow_mut().set_target_fps(fps);

        let host = HeadlessHost::new()
            .with_content_height(scenario.content_height)
            .with_chrome_height(scenario.chrome_height);
        let sheet = BottomSheet::new(config, host).with_scheduler(&scheduler);

        Self {
            sheet,
            scheduler,
            frames: 0,
        }
    }

    /// Feed every step and collect a report entry after each
    pub fn run(mut self, scenario: &Scenario) -> ReplayReport {
        let fps = self.scheduler.borrow().target_fps();
        let mut steps = Vec::with_capacity(scenario.steps.len());

        for (index, step) in scenario.steps.iter().enumerate() {
            self.apply(step);
            tracing::debug!(
                index,
                step = step.name(),
                offset = self.sheet.visible_offset(),
                "step applied"
            );
            steps.push(self.snapshot(index, step));
        }

        ReplayReport {
            fps,
            frames: self.frames,
            final_offset: self.sheet.visible_offset(),
            steps,
        }
    }

    pub fn apply(&mut self, step: &ScenarioStep) {
        match step {
            ScenarioStep::Present => self.sheet.set_presented(true),
            ScenarioStep::Dismiss => self.sheet.set_presented(false),
            ScenarioStep::Pan {
                phase,
                origin,
                translation,
                velocity,
            } => {
                let pan = PanGesture::new(*phase, *origin)
                    .translation(*translation)
                    .velocity(*velocity);
                self.sheet.handle_pan(pan);
            }
            ScenarioStep::Scroll { offset } => {
                self.sheet.host_mut().scroll_content_to(*offset);
                self.sheet.on_content_scrolled();
            }
            ScenarioStep::TapDragger => {
                self.sheet.handle_tap(TapGesture::new(GestureOrigin::DraggerBar));
            }
            ScenarioStep::Tick { frames } => {
                for _ in 0..*frames {
                    self.scheduler.borrow_mut().step_frame();
                    self.sheet.tick();
                    self.frames += 1;
                }
            }
            ScenarioStep::SetConfig { config } => self.sheet.set_configuration(config.clone()),
        }
    }

    fn snapshot(&self, index: usize, step: &ScenarioStep) -> StepReport {
        StepReport {
            index,
            step: step.name(),
            offset: self.sheet.visible_offset(),
            presented: self.sheet.is_presented(),
            mode: self.sheet.drag_mode(),
            animating: self.sheet.is_animating(),
            animation_target: self.sheet.animation_target(),
            content_offset: self.sheet.host().content_scroll_offset(),
            frozen_scroll_offset: self.sheet.frozen_scroll_offset(),
        }
    }
}
