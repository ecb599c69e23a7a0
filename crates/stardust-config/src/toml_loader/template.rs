//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Stardust Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[galaxy]
# count = 15000             # 0-2000000
# size = 0.05               # world units, attenuated by distance
# radius = 40.0
# branches = 5              # 1-64
# spin = 1.0
# randomness = 0.2          # 0.0-10.0
# randomness_power = 3.0    # 1.0-20.0
# inside_color = "#ff00ff"
# outside_color = "#00ffff"

[camera]
# fov = 75.0                # degrees, 1-179
# near = 0.1
# far = 1000.0
# position = [0.0, 10.0, 30.0]
# target = [0.0, 0.0, 0.0]

[animation]
# rotation_speed = 0.05     # rad/s about the vertical axis
# bob_frequency = 0.2
# bob_amplitude = 1.0

[fog]
# enabled = true
# color = "#000000"
# density = 0.001           # 0.0-1.0

[renderer]
# max_pixel_ratio = 2.0     # 0.5-4.0
# clear_color = "#000000"
# clear_alpha = 1.0         # 0.0-1.0
# present_mode = "fifo"     # fifo, mailbox, immediate

[window]
# title = "Shocked Future — Under Construction"
# loading_title = "INITIALIZING GALAXY CORE..."
# width = 1280
# height = 800

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
