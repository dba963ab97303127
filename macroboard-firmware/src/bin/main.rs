// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-S3 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::otg_fs::Usb;
use esp_hal::otg_fs::asynch::{Config as OtgConfig, Driver};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use macroboard::config::USB_EP_OUT_BUFFER_SIZE;
use macroboard::tasks::{keypad_task, usb_task};
use macroboard::usb::build_usb;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und USB, startet die Embassy Runtime und spawnt
/// die Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-S3 Konfiguration: CPU auf maximale Taktfrequenz (240 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    defmt::info!("MacroBoard starting");

    // Tasten: Pull-Up, gedrückt = LOW
    let pull_up = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        Input::new(peripherals.GPIO1, pull_up),
        Input::new(peripherals.GPIO2, pull_up),
        Input::new(peripherals.GPIO3, pull_up),
        Input::new(peripherals.GPIO4, pull_up),
        Input::new(peripherals.GPIO5, pull_up),
        Input::new(peripherals.GPIO6, pull_up),
        Input::new(peripherals.GPIO7, pull_up),
        Input::new(peripherals.GPIO8, pull_up),
    ];

    // Indikator-LED ist active-low: HIGH = aus
    let indicator = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());

    // USB-OTG: D+ an GPIO20, D- an GPIO19
    static EP_OUT_BUFFER: static_cell::StaticCell<[u8; USB_EP_OUT_BUFFER_SIZE]> =
        static_cell::StaticCell::new();
    let ep_out_buffer = EP_OUT_BUFFER.init([0; USB_EP_OUT_BUFFER_SIZE]);

    let usb = Usb::new(peripherals.USB0, peripherals.GPIO20, peripherals.GPIO19);
    let driver = Driver::new(usb, ep_out_buffer, OtgConfig::default());
    let (usb_device, hid_writer) = build_usb(driver);

    // Spawn USB Task (muss laufen, damit der Host das Keyboard enumeriert)
    spawner.spawn(usb_task(usb_device)).unwrap();

    // Spawn Keypad Task (Start-Animation, dann Poll-Schleife)
    spawner
        .spawn(keypad_task(
            buttons,
            indicator,
            peripherals.GPIO9,
            peripherals.RMT,
            hid_writer,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
