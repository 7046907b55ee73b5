//! Built-in showcase catalog.
//!
//! The canonical demo listing: one `basic` group with 19 canvas demos, plus
//! a disabled `optimization` scaffold. Construction is pure, so every call
//! to [`RouteManifest::builtin`] yields an identical manifest.

use once_cell::sync::Lazy;

use crate::{RouteEntry, RouteGroup, RouteManifest};

static BUILTIN: Lazy<RouteManifest> = Lazy::new(|| {
    let basic = RouteGroup::new("basic").with_entries([
        RouteEntry::new("/ball", "跳动小球", "Ball"),
        RouteEntry::new("/chart", "简易图表", "Chart"),
        RouteEntry::new("/clock", "时钟", "Clock"),
        RouteEntry::new("/colorful", "炫彩小球", "Colorful"),
        RouteEntry::new("/coordinate", "坐标系转换", "Coordinate"),
        RouteEntry::new("/drag", "图形拖拽", "Drag"),
        RouteEntry::new("/dynamic", "动态离子", "Dynamic"),
        RouteEntry::new("/erase", "刮刮乐", "Erase"),
        RouteEntry::new("/fighter", "飞机大战", "Fighter"),
        RouteEntry::new("/fireworks", "烟花", "Fireworks"),
        RouteEntry::new("/flow", "粒子游动", "Flow"),
        RouteEntry::new("/flyline", "飞线", "Flyline"),
        RouteEntry::new("/paint", "简易画板", "Paint"),
        RouteEntry::new("/panzoom", "拖动和缩放画布", "Panzoom"),
        RouteEntry::new("/rotation", "图形旋转", "Rotation"),
        RouteEntry::new("/select", "图形拾取", "Select"),
        RouteEntry::new("/snake", "贪吃蛇", "Snake"),
        RouteEntry::new("/solar", "太阳系", "Solar"),
        RouteEntry::new("/svg", "绘制SVG内容", "Svg"),
    ]);

    // TODO: populate the optimization demos or delete the group; the
    // placeholder entry carries no content yet.
    let optimization = RouteGroup::new("optimization")
        .disabled()
        .with_entry(RouteEntry::placeholder());

    RouteManifest::new().with_group(basic).with_group(optimization)
});

impl RouteManifest {
    /// The built-in showcase catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteManifest;
    ///
    /// let manifest = RouteManifest::builtin();
    /// assert_eq!(manifest.len(), 1); // only `basic` is enabled
    /// assert_eq!(manifest.flatten().len(), 19);
    /// ```
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }
}
