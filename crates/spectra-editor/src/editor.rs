//! Frame-driven editor controller
//!
//! [`Editor::update`] is called once per frame with that frame's input and
//! the live scene. Within a frame the steps run in a fixed order: menu key,
//! delete, selection, gesture on the held entity, camera pan, camera zoom.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use spectra_core::geometry::{look_rotation, planar_distance, rotation_towards, scale_factor};
use spectra_core::{EntityId, ObjectKind, Scene};

use crate::camera::ViewCamera;
use crate::config::{DisplayMode, EditorConfig};
use crate::events::{EditorEvent, FrameReport};
use crate::input::InputSnapshot;
use crate::panels::{PanelPlacement, PanelSet};
use crate::picking::ScenePicker;
use crate::state::{EditorSession, Gesture, MenuChange};

/// Shared editor handle
pub type SharedEditor = Arc<Mutex<Editor>>;

/// Everything outside the editor that a frame reads or mutates
pub struct EditorContext<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a mut ViewCamera,
    pub panels: &'a mut PanelSet,
    pub picker: &'a dyn ScenePicker,
}

/// The manipulation controller
#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: EditorConfig,
    session: EditorSession,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            session: EditorSession::new(),
        }
    }

    pub fn into_shared(self) -> SharedEditor {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Start a fresh session, e.g. when the editing scene is entered
    pub fn reset_session(&mut self) {
        self.session.reset();
        tracing::debug!("Editor session reset");
    }

    /// Run one frame
    pub fn update(&mut self, input: &InputSnapshot, ctx: &mut EditorContext<'_>) -> FrameReport {
        let mut report = FrameReport::default();
        let pointer_world = ctx.camera.screen_to_plane(input.pointer);

        if input.key_pressed(self.config.bindings.menu) {
            let change = self.session.menu.handle_escape();
            self.report_menu_change(change, &mut report);
        }

        if input.key_pressed(self.config.bindings.delete) {
            self.delete_held(ctx.scene, ctx.panels, &mut report);
        }

        if self.session.menu.is_paused() {
            return report;
        }

        if input.primary.pressed {
            self.select(input, pointer_world, ctx, &mut report);
        }

        self.manipulate(input, pointer_world, ctx.scene);
        self.pan(input, ctx.camera);
        self.zoom(input, ctx.camera);

        report
    }

    /// Toggle the pause menu as if the menu key had been pressed
    pub fn toggle_pause(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        let change = self.session.menu.toggle_pause();
        self.report_menu_change(change, &mut report);
        report
    }

    /// Toggle the help page of the pause menu
    pub fn toggle_help(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if let Some(change) = self.session.menu.toggle_help() {
            self.report_menu_change(change, &mut report);
        }
        report
    }

    fn report_menu_change(&mut self, change: MenuChange, report: &mut FrameReport) {
        match change {
            MenuChange::Pause(open) => {
                tracing::debug!("Pause menu {}", if open { "opened" } else { "closed" });
                report.push(EditorEvent::PauseToggled { open });
                report.push(EditorEvent::ReclaimResources);
            }
            MenuChange::Help(open) => {
                report.push(EditorEvent::HelpToggled { open });
            }
        }
    }

    /// Remove the held entity and its descendants.
    ///
    /// Does nothing if no entity is held or the held entity is background.
    /// Returns the id of the removed entity.
    pub fn delete_held(
        &mut self,
        scene: &mut Scene,
        panels: &mut PanelSet,
        report: &mut FrameReport,
    ) -> Option<EntityId> {
        let id = self.session.held()?;

        let Some(entity) = scene.get(id) else {
            // removed behind our back
            self.session.release_held();
            return None;
        };
        if entity.is_background() {
            tracing::debug!("Ignoring delete of background entity '{}'", entity.name);
            return None;
        }

        match scene.remove(id) {
            Ok(removed) => {
                tracing::info!("Deleted entity {} ({} removed)", id, removed.len());
            }
            Err(e) => {
                tracing::warn!("Failed to delete entity: {}", e);
                return None;
            }
        }

        self.session.release_held();
        panels.close_all();
        report.push(EditorEvent::Deleted { id });
        report.push(EditorEvent::ReclaimResources);
        Some(id)
    }

    fn select(
        &mut self,
        input: &InputSnapshot,
        pointer_world: Vec3,
        ctx: &mut EditorContext<'_>,
        report: &mut FrameReport,
    ) {
        if input.pointer_over_ui {
            return;
        }

        let ray = ctx.camera.screen_to_ray(input.pointer);
        let Some(hit) = ctx.picker.pick(ctx.scene, ray) else {
            self.deselect(ctx.panels, report);
            return;
        };

        let root = ctx.scene.root_of(hit).unwrap_or(hit);
        let Some(entity) = ctx.scene.get(root) else {
            return;
        };

        self.session.hold(root);
        if self.config.display_mode == DisplayMode::Planar {
            self.session.gesture = Gesture::Dragging {
                offset: entity.transform.position - pointer_world,
            };
        }

        let kind = entity.kind();
        if let Some(kind) = kind {
            let placement = match self.config.display_mode {
                DisplayMode::Planar => {
                    ctx.panels.close_all();
                    None
                }
                DisplayMode::Spatial => Some(self.panel_placement(ctx.camera)),
            };
            ctx.panels.open(kind.panel(), entity, placement);
        }

        tracing::debug!(
            "Selected '{}' ({})",
            entity.name,
            kind.map_or("background", |k| k.name())
        );
        report.push(EditorEvent::Selected { id: root, kind });
    }

    fn deselect(&mut self, panels: &mut PanelSet, report: &mut FrameReport) {
        self.session.release_held();
        panels.close_all();
        report.push(EditorEvent::Deselected);
    }

    /// In front of the camera, offset to the right, facing away from it
    fn panel_placement(&self, camera: &ViewCamera) -> PanelPlacement {
        let pose = camera.pose;
        let placement = &self.config.panel_placement;
        let position = pose.position
            + pose.forward() * placement.distance
            + pose.right() * placement.side_offset;

        PanelPlacement {
            position,
            rotation: look_rotation(position - pose.position),
        }
    }

    fn manipulate(&mut self, input: &InputSnapshot, pointer_world: Vec3, scene: &mut Scene) {
        if !input.primary.held {
            if self.session.gesture.is_active() {
                tracing::debug!("{} ended", self.session.gesture.mode().name());
                self.session.gesture = Gesture::Idle;
            }
            return;
        }

        if !self.session.gesture.is_active() {
            return;
        }
        let Some((id, entity)) = self
            .session
            .held()
            .and_then(|id| scene.get(id).map(|entity| (id, entity)))
        else {
            self.session.release_held();
            return;
        };

        let scalable = entity.kind() != Some(ObjectKind::Light);
        let bindings = &self.config.bindings;
        let mut transform = entity.transform;

        if input.key_held(bindings.rotate) {
            transform.rotation = rotation_towards(transform.position, pointer_world);
            self.session.gesture = Gesture::Rotating;
        } else if input.key_held(bindings.scale) && scalable {
            let distance = planar_distance(transform.position, pointer_world);
            match self.session.gesture {
                Gesture::Scaling {
                    initial_distance,
                    initial_scale,
                } => {
                    transform.scale = initial_scale * scale_factor(initial_distance, distance);
                }
                _ => {
                    self.session.gesture = Gesture::Scaling {
                        initial_distance: distance,
                        initial_scale: transform.scale,
                    };
                }
            }
        } else if let Gesture::Dragging { offset } = self.session.gesture {
            transform.position.x = pointer_world.x + offset.x;
            transform.position.y = pointer_world.y + offset.y;
        }

        // Attached parts keep their placement relative to the held entity
        if let Err(e) = scene.set_transform(id, transform) {
            tracing::warn!("Gesture target vanished: {}", e);
            self.session.release_held();
        }
    }

    fn pan(&mut self, input: &InputSnapshot, camera: &mut ViewCamera) {
        let button = input.button(self.config.bindings.pan);

        if button.pressed {
            self.session.pan_anchor = Some(camera.screen_to_plane(input.pointer));
        } else if button.held {
            let Some(anchor) = self.session.pan_anchor else {
                return;
            };
            let delta = anchor - camera.screen_to_plane(input.pointer);
            camera.pose.position.x += delta.x;
            camera.pose.position.y += delta.y;
        } else {
            self.session.pan_anchor = None;
        }
    }

    /// Orthographic cameras only. The size is clamped every frame.
    fn zoom(&self, input: &InputSnapshot, camera: &mut ViewCamera) {
        let Some(size) = camera.ortho_size() else {
            return;
        };
        let zoom = &self.config.zoom;
        let new_size = (size - input.scroll * zoom.speed).clamp(zoom.min_size, zoom.max_size);
        camera.set_ortho_size(new_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, PointerButton};
    use crate::panels::tests::recording_panels;
    use crate::picking::BoundsPicker;
    use approx::assert_relative_eq;
    use glam::{Quat, Vec2};
    use spectra_core::{Capabilities, Entity, LightEmitter, PanelKind, Transform};

    const VIEWPORT: Vec2 = Vec2::new(200.0, 200.0);

    /// Screen position of a world point for the default test camera
    /// (orthographic size 10, looking down +Z from the origin)
    fn screen_of(world: Vec2) -> Vec2 {
        Vec2::new(100.0 + world.x * 10.0, 100.0 - world.y * 10.0)
    }

    struct Fixture {
        editor: Editor,
        scene: Scene,
        camera: ViewCamera,
        panels: PanelSet,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_config(EditorConfig::default())
        }

        fn with_config(config: EditorConfig) -> Self {
            Self {
                editor: Editor::new(config),
                scene: Scene::new(),
                camera: ViewCamera::orthographic(10.0, VIEWPORT),
                panels: PanelSet::new(),
            }
        }

        fn frame(&mut self, input: InputSnapshot) -> FrameReport {
            let mut ctx = EditorContext {
                scene: &mut self.scene,
                camera: &mut self.camera,
                panels: &mut self.panels,
                picker: &BoundsPicker,
            };
            self.editor.update(&input, &mut ctx)
        }

        fn add_at(&mut self, entity: Entity, x: f32, y: f32) -> EntityId {
            self.scene
                .add(entity.with_transform(Transform::from_position(Vec3::new(x, y, 0.0))))
        }

        fn transform(&self, id: EntityId) -> Transform {
            self.scene.get(id).unwrap().transform
        }
    }

    fn at(x: f32, y: f32) -> InputSnapshot {
        InputSnapshot::at(screen_of(Vec2::new(x, y)))
    }

    #[test]
    fn test_press_selects_and_drags() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 1.0, 1.0);

        let report = fx.frame(at(1.2, 1.1).press(PointerButton::Primary));
        assert_eq!(report.selected(), Some(id));
        assert_eq!(fx.editor.session().held(), Some(id));
        assert_eq!(fx.editor.session().mode(), crate::state::GestureMode::Dragging);
        // same frame: offset makes the move a no-op
        assert_relative_eq!(fx.transform(id).position.x, 1.0, epsilon = 1e-4);

        fx.frame(at(3.2, -0.9).hold(PointerButton::Primary));
        let p = fx.transform(id).position;
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-4);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_selection_resolves_root_and_opens_panel() {
        let (panels, logs) = recording_panels();
        let mut fx = Fixture::new();
        fx.panels = panels;

        let root = fx.add_at(
            Entity::new("light", Capabilities::light(LightEmitter::default())),
            5.0,
            5.0,
        );
        let child = fx.add_at(Entity::background("housing").with_parent(root), 0.0, 0.0);

        let report = fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        assert!(report.contains(&EditorEvent::Selected {
            id: root,
            kind: Some(ObjectKind::Light)
        }));
        assert_ne!(fx.editor.session().held(), Some(child));
        assert_eq!(fx.panels.active(), vec![PanelKind::Light]);
        assert_eq!(logs[&PanelKind::Light].lock().loaded, vec![root]);
    }

    #[test]
    fn test_drag_carries_children() {
        let mut fx = Fixture::new();
        let root = fx.add_at(
            Entity::new("light", Capabilities::light(LightEmitter::default())),
            5.0,
            5.0,
        );
        let housing = fx.scene.add(
            Entity::background("housing")
                .with_parent(root)
                .with_transform(Transform::from_position(Vec3::new(5.0, 5.6, 0.5))),
        );

        fx.frame(at(5.0, 5.0).press(PointerButton::Primary));
        assert_eq!(fx.editor.session().held(), Some(root));
        fx.frame(at(2.0, 1.0).hold(PointerButton::Primary));

        let p = fx.transform(root).position;
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-4);
        let h = fx.transform(housing).position;
        assert_relative_eq!(h.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(h.y, 1.6, epsilon = 1e-4);
        assert_relative_eq!(h.z, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_carries_children() {
        let mut fx = Fixture::new();
        let root = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        let frame = fx.add_at(Entity::background("frame").with_parent(root), 1.0, 0.0);

        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        fx.frame(
            at(0.0, 2.0)
                .hold(PointerButton::Primary)
                .with_key_held(Key::Char('r')),
        );

        let t = fx.transform(frame);
        assert_relative_eq!(t.position.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(t.position.y, 1.0, epsilon = 1e-4);
        assert_relative_eq!(
            t.rotation.angle_between(fx.transform(root).rotation),
            0.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_planar_selection_closes_other_panels() {
        let (panels, _logs) = recording_panels();
        let mut fx = Fixture::new();
        fx.panels = panels;
        fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.add_at(
            Entity::new("light", Capabilities::light(LightEmitter::default())),
            5.0,
            0.0,
        );

        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        fx.frame(at(0.0, 0.0).release(PointerButton::Primary));
        fx.frame(at(5.0, 0.0).press(PointerButton::Primary));
        assert_eq!(fx.panels.active(), vec![PanelKind::Light]);
    }

    #[test]
    fn test_spatial_selection_places_panel() {
        let (panels, logs) = recording_panels();
        let config = EditorConfig {
            display_mode: DisplayMode::Spatial,
            ..Default::default()
        };
        let mut fx = Fixture::with_config(config);
        fx.panels = panels;
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);

        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        assert_eq!(fx.editor.session().held(), Some(id));
        // spatial mode does not drag
        assert_eq!(fx.editor.session().gesture(), Gesture::Idle);

        let log = logs[&PanelKind::Mirror].lock();
        assert!(log.active);
        let placement = log.placements[0];
        // camera at (0, 0, -10) looking down +Z
        assert_relative_eq!(placement.position.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(placement.position.z, -5.0, epsilon = 1e-5);
        let facing = placement.rotation * Vec3::Z;
        assert!(facing.z > 0.0);
    }

    #[test]
    fn test_miss_deselects() {
        let (panels, _logs) = recording_panels();
        let mut fx = Fixture::new();
        fx.panels = panels;
        fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);

        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        fx.frame(at(0.0, 0.0).release(PointerButton::Primary));
        let report = fx.frame(at(8.0, 8.0).press(PointerButton::Primary));

        assert!(report.contains(&EditorEvent::Deselected));
        assert_eq!(fx.editor.session().held(), None);
        assert!(fx.panels.active().is_empty());
    }

    #[test]
    fn test_clicks_over_ui_are_ignored() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        fx.frame(at(0.0, 0.0).release(PointerButton::Primary));

        // miss over UI keeps the selection
        let report = fx.frame(at(8.0, 8.0).press(PointerButton::Primary).over_ui());
        assert!(report.is_empty());
        assert_eq!(fx.editor.session().held(), Some(id));
    }

    #[test]
    fn test_rotate_wins_over_scale() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));

        fx.frame(
            at(0.0, 2.0)
                .hold(PointerButton::Primary)
                .with_key_held(Key::Char('r'))
                .with_key_held(Key::Char('s')),
        );
        let t = fx.transform(id);
        assert_eq!(fx.editor.session().gesture(), Gesture::Rotating);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.position, Vec3::ZERO);
        let x_axis = t.rotation * Vec3::X;
        assert_relative_eq!(x_axis.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_scaling_snapshots_then_scales() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.frame(at(0.4, 0.0).press(PointerButton::Primary));

        // first scaling frame only takes the snapshot
        fx.frame(at(2.0, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));
        assert_eq!(fx.transform(id).scale, Vec3::ONE);

        fx.frame(at(4.0, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));
        let scale = fx.transform(id).scale;
        assert_relative_eq!(scale.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(scale.z, 2.0, epsilon = 1e-4);
        assert_eq!(fx.transform(id).position, Vec3::ZERO);

        // releasing the modifier does not resume dragging
        fx.frame(at(6.0, 0.0).hold(PointerButton::Primary));
        assert_eq!(fx.transform(id).position, Vec3::ZERO);
        assert_relative_eq!(fx.transform(id).scale.x, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_scaling_from_zero_distance_keeps_scale() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        fx.frame(at(0.0, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));
        fx.frame(at(3.0, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));
        assert_eq!(fx.transform(id).scale, Vec3::ONE);
    }

    #[test]
    fn test_lights_do_not_scale() {
        let mut fx = Fixture::new();
        let id = fx.add_at(
            Entity::new("light", Capabilities::light(LightEmitter::default())),
            0.0,
            0.0,
        );
        fx.frame(at(0.4, 0.0).press(PointerButton::Primary));
        fx.frame(at(0.4, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));
        fx.frame(at(2.0, 0.0).hold(PointerButton::Primary).with_key_held(Key::Char('s')));

        assert_eq!(fx.transform(id).scale, Vec3::ONE);
        // scale key is ignored, so the drag continues
        assert_relative_eq!(fx.transform(id).position.x, 1.6, epsilon = 1e-4);
    }

    #[test]
    fn test_release_goes_idle_without_mutation() {
        let mut fx = Fixture::new();
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));

        let before = fx.transform(id);
        fx.frame(
            at(3.0, 3.0)
                .release(PointerButton::Primary)
                .with_key_held(Key::Char('r')),
        );
        assert_eq!(fx.editor.session().gesture(), Gesture::Idle);
        let after = fx.transform(id);
        assert_eq!(after.position, before.position);
        assert_eq!(after.rotation, Quat::IDENTITY);
        assert_eq!(fx.editor.session().held(), Some(id));
    }

    #[test]
    fn test_delete_held() {
        let (panels, _logs) = recording_panels();
        let mut fx = Fixture::new();
        fx.panels = panels;
        let id = fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);
        let child = fx.scene.add(Entity::background("part").with_parent(id));
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));

        let report = fx.frame(at(0.0, 0.0).with_key_pressed(Key::Delete));
        assert!(report.contains(&EditorEvent::Deleted { id }));
        assert!(report.contains(&EditorEvent::ReclaimResources));
        assert!(!fx.scene.contains(id));
        assert!(!fx.scene.contains(child));
        assert_eq!(fx.editor.session().held(), None);
        assert!(fx.panels.active().is_empty());
    }

    #[test]
    fn test_delete_guard() {
        let mut fx = Fixture::new();
        let floor = fx.add_at(Entity::background("floor"), 0.0, 0.0);

        // nothing held
        let report = fx.frame(at(0.0, 0.0).with_key_pressed(Key::Delete));
        assert!(report.is_empty());

        // background held
        fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        assert_eq!(fx.editor.session().held(), Some(floor));
        let report = fx.frame(at(0.0, 0.0).with_key_pressed(Key::Delete));
        assert!(!report.contains(&EditorEvent::Deleted { id: floor }));
        assert!(fx.scene.contains(floor));
    }

    #[test]
    fn test_pause_blocks_selection() {
        let mut fx = Fixture::new();
        fx.add_at(Entity::new("mirror", Capabilities::mirror()), 0.0, 0.0);

        let report = fx.frame(at(0.0, 0.0).with_key_pressed(Key::Escape));
        assert!(report.contains(&EditorEvent::PauseToggled { open: true }));
        assert!(report.contains(&EditorEvent::ReclaimResources));

        let report = fx.frame(at(0.0, 0.0).press(PointerButton::Primary));
        assert!(report.is_empty());
        assert_eq!(fx.editor.session().held(), None);

        let report = fx.frame(at(0.0, 0.0).with_key_pressed(Key::Escape));
        assert!(report.contains(&EditorEvent::PauseToggled { open: false }));
    }

    #[test]
    fn test_help_closes_before_pause() {
        let mut fx = Fixture::new();
        fx.editor.toggle_pause();
        let report = fx.editor.toggle_help();
        assert!(report.contains(&EditorEvent::HelpToggled { open: true }));

        let report = fx.frame(InputSnapshot::default().with_key_pressed(Key::Escape));
        assert!(report.contains(&EditorEvent::HelpToggled { open: false }));
        assert!(fx.editor.session().menu().is_paused());
    }

    #[test]
    fn test_pan_keeps_anchor_under_pointer() {
        let mut fx = Fixture::new();
        let grab = screen_of(Vec2::new(1.0, 1.0));
        fx.frame(InputSnapshot::at(grab).press(PointerButton::Middle));
        assert!(fx.editor.session().is_panning());

        let moved = screen_of(Vec2::new(3.0, -2.0));
        fx.frame(InputSnapshot::at(moved).hold(PointerButton::Middle));
        assert_relative_eq!(fx.camera.pose.position.x, -2.0, epsilon = 1e-4);
        assert_relative_eq!(fx.camera.pose.position.y, 3.0, epsilon = 1e-4);
        assert_eq!(fx.camera.pose.position.z, -10.0);

        let under_pointer = fx.camera.screen_to_plane(moved);
        assert_relative_eq!(under_pointer.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(under_pointer.y, 1.0, epsilon = 1e-4);

        fx.frame(InputSnapshot::at(moved).release(PointerButton::Middle));
        assert!(!fx.editor.session().is_panning());
    }

    #[test]
    fn test_zoom_clamps() {
        let mut fx = Fixture::new();
        fx.frame(InputSnapshot::default().with_scroll(0.3));
        assert_relative_eq!(fx.camera.ortho_size().unwrap(), 7.0, epsilon = 1e-5);

        fx.frame(InputSnapshot::default().with_scroll(5.0));
        assert_eq!(fx.camera.ortho_size(), Some(5.0));

        fx.frame(InputSnapshot::default().with_scroll(-50.0));
        assert_eq!(fx.camera.ortho_size(), Some(20.0));
    }

    #[test]
    fn test_zoom_ignores_perspective() {
        let mut fx = Fixture::new();
        fx.camera = ViewCamera::perspective(60.0, VIEWPORT);
        fx.frame(InputSnapshot::default().with_scroll(1.0));
        assert_eq!(fx.camera.ortho_size(), None);
    }

    #[test]
    fn test_shared_editor() {
        let shared = Editor::default().into_shared();
        shared.lock().reset_session();
        assert_eq!(shared.lock().session().held(), None);
    }
}
