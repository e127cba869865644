use fleetcheck::Vehicle;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_vehicle_list(vehicles: &[Vehicle], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = CommandHeader::new(Icon::Vehicle, "Vehicles").render(supports_color, supports_unicode);
    out.push('\n');

    if vehicles.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("No vehicles available.").render(supports_color)
        ));
        return out;
    }

    let id_width = vehicles.iter().map(|v| v.id.len()).max().unwrap_or(0);
    for vehicle in vehicles {
        out.push_str(&format!(
            "  {}  {}\n",
            ColoredText::dim(format!("{:<id_width$}", vehicle.id)).render(supports_color),
            vehicle.form_label()
        ));
    }
    out
}
