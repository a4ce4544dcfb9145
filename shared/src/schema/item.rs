use std::{collections::HashMap, sync::Arc};

use glam::Vec3;

use crate::{
    array_element, component, copy_to, element::lerp, Component, Element, ElementMut,
    ElementRef, Property,
};

/// How long each status of a state machine lasts, in seconds. `None` is a persistent status
/// that never advances on its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusDurations {
    durations: Vec<Option<f32>>,
}

impl StatusDurations {
    /// Durations indexed by status id
    pub fn new(durations: Vec<Option<f32>>) -> Self {
        Self { durations }
    }

    /// Unknown ids are persistent
    pub fn duration(&self, status_id: u8) -> Option<f32> {
        self.durations
            .get(usize::from(status_id))
            .copied()
            .flatten()
    }
}

component! {
    /// Position in a status state machine: which status, and how far into it
    pub struct ByteStatusComponent {
        pub id: Property<u8>,
        pub elapsed: Property<f32> = Property::new().elapsed(),
    }
}

impl ByteStatusComponent {
    /// Advances through the state machine rather than blending ids: the elapsed time is
    /// blended on a timeline where `to`'s status starts when `from`'s ends, and the id is
    /// whichever status the blended time falls in.
    pub fn interpolate_status(
        &mut self,
        from: &ByteStatusComponent,
        to: &ByteStatusComponent,
        t: f32,
        durations: &StatusDurations,
    ) {
        let (Some(&from_id), Some(&to_id), Some(&e1), Some(&e2)) = (
            from.id.get(),
            to.id.get(),
            from.elapsed.get(),
            to.elapsed.get(),
        ) else {
            copy_to(to, self);
            return;
        };

        match durations.duration(from_id) {
            None => {
                self.id.set(to_id);
                self.elapsed
                    .set(lerp(if from_id == to_id { e1 } else { 0.0 }, e2, t));
            }
            Some(d1) => {
                let e2 = if from_id != to_id || e1 > e2 { e2 + d1 } else { e2 };
                let elapsed = lerp(e1, e2, t);
                if elapsed > d1 {
                    self.id.set(to_id);
                    self.elapsed.set(elapsed - d1);
                } else {
                    self.id.set(from_id);
                    self.elapsed.set(elapsed);
                }
            }
        }
    }
}

/// Status tables of one item type
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStatuses {
    pub status: StatusDurations,
    pub equip: StatusDurations,
    /// Only items that can aim down sights
    pub ads: Option<StatusDurations>,
}

/// Status tables for every item id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemCatalog {
    items: HashMap<u8, ItemStatuses>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item_id: u8, statuses: ItemStatuses) -> Self {
        self.items.insert(item_id, statuses);
        self
    }

    pub fn get(&self, item_id: u8) -> Option<&ItemStatuses> {
        self.items.get(&item_id)
    }
}

component! {
    pub struct ItemComponent {
        pub id: Property<u8>,
        pub status: ByteStatusComponent,
        pub ammo_in_mag: Property<u16>,
        pub ammo_in_reserve: Property<u16>,
    }
}

impl ItemComponent {
    pub fn no_ammo_left(&self) -> bool {
        self.ammo_in_mag.or(0) == 0 && self.ammo_in_reserve.or(0) == 0
    }

    /// Item slots are only blended through their inventory, which knows the catalog
    pub fn interpolate_item(
        &mut self,
        from: &ItemComponent,
        to: &ItemComponent,
        t: f32,
        catalog: &ItemCatalog,
    ) {
        let (Some(&from_id), Some(&to_id)) = (from.id.get(), to.id.get()) else {
            copy_to(to, self);
            return;
        };
        self.ammo_in_mag.set_to(&to.ammo_in_mag);
        self.ammo_in_reserve.set_to(&to.ammo_in_reserve);
        self.id.set(to_id);
        match catalog.get(from_id) {
            Some(statuses) => {
                self.status
                    .interpolate_status(&from.status, &to.status, t, &statuses.status)
            }
            None => copy_to(&to.status, &mut self.status),
        }
    }
}

pub const ITEMS_COUNT: usize = 10;

array_element! {
    pub struct ItemsArray([ItemComponent; ITEMS_COUNT]);
}

/// A player's items. Interpolation follows the equipped item's status tables once a catalog
/// is attached, and falls back to blending each leaf otherwise.
#[derive(Clone, Debug, Default)]
pub struct InventoryComponent {
    pub equipped_index: Property<u8>,
    pub previous_equipped_index: Property<u8>,
    pub equip_status: ByteStatusComponent,
    pub ads_status: ByteStatusComponent,
    pub items: ItemsArray,
    pub tracer_time_us: Property<u32>,
    pub tracer_start: Property<Vec3>,
    pub tracer_end: Property<Vec3>,
    catalog: Option<Arc<ItemCatalog>>,
}

impl InventoryComponent {
    pub fn with_catalog(catalog: Arc<ItemCatalog>) -> Self {
        Self {
            catalog: Some(catalog),
            ..Self::default()
        }
    }

    pub fn set_catalog(&mut self, catalog: Arc<ItemCatalog>) {
        self.catalog = Some(catalog);
    }

    pub fn equipped_item(&self) -> Option<&ItemComponent> {
        self.equipped_index
            .get()
            .and_then(|&index| self.items.get(usize::from(index)))
    }

    pub fn has_item_equipped(&self) -> bool {
        self.equipped_index.has_value()
    }
}

impl PartialEq for InventoryComponent {
    fn eq(&self, other: &Self) -> bool {
        crate::equal_to(self, other)
    }
}

impl Element for InventoryComponent {
    fn kind(&self) -> ElementRef<'_> {
        ElementRef::Component(self)
    }

    fn kind_mut(&mut self) -> ElementMut<'_> {
        ElementMut::Component(self)
    }

    fn box_clone(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl Component for InventoryComponent {
    fn child_count(&self) -> usize {
        8
    }

    fn child(&self, index: usize) -> Option<&dyn Element> {
        let child: &dyn Element = match index {
            0 => &self.equipped_index,
            1 => &self.previous_equipped_index,
            2 => &self.equip_status,
            3 => &self.ads_status,
            4 => &self.items,
            5 => &self.tracer_time_us,
            6 => &self.tracer_start,
            7 => &self.tracer_end,
            _ => return None,
        };
        Some(child)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        let child: &mut dyn Element = match index {
            0 => &mut self.equipped_index,
            1 => &mut self.previous_equipped_index,
            2 => &mut self.equip_status,
            3 => &mut self.ads_status,
            4 => &mut self.items,
            5 => &mut self.tracer_time_us,
            6 => &mut self.tracer_start,
            7 => &mut self.tracer_end,
            _ => return None,
        };
        Some(child)
    }

    fn custom_interpolate(&mut self, from: &dyn Component, to: &dyn Component, t: f32) -> bool {
        let Some(catalog) = self.catalog.clone() else {
            return false;
        };
        let (Some(i1), Some(i2)) = (
            from.as_any().downcast_ref::<Self>(),
            to.as_any().downcast_ref::<Self>(),
        ) else {
            return false;
        };

        let equipped = match (i1.equipped_index.get(), i2.equipped_index.get()) {
            (Some(a), Some(b)) if a == b => *a,
            _ => {
                copy_to(i1, self);
                return true;
            }
        };

        let statuses = i1
            .equipped_item()
            .and_then(|item| item.id.get())
            .and_then(|&id| catalog.get(id))
            .cloned()
            .unwrap_or_default();
        match &statuses.ads {
            Some(ads) => self
                .ads_status
                .interpolate_status(&i1.ads_status, &i2.ads_status, t, ads),
            None => copy_to(&i2.ads_status, &mut self.ads_status),
        }
        self.equip_status
            .interpolate_status(&i1.equip_status, &i2.equip_status, t, &statuses.equip);
        self.equipped_index.set(equipped);
        self.previous_equipped_index
            .set_to(&i2.previous_equipped_index);
        for index in 0..ITEMS_COUNT {
            self.items[index].interpolate_item(&i1.items[index], &i2.items[index], t, &catalog);
        }
        self.tracer_time_us.set_to(&i2.tracer_time_us);
        self.tracer_start.set_to(&i2.tracer_start);
        self.tracer_end.set_to(&i2.tracer_end);
        true
    }
}
