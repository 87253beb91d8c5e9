// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `jvm`, `dotnet`, `go`, `nodejs`, `v8js`, `cpython` namespaces.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// The number of objects collected inside a generation since interpreter start.
///
/// Instrument: `counter`. Unit: `{object}`.
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_COLLECTED_OBJECTS: &str = "cpython.gc.collected_objects";

/// The number of times a generation was collected since interpreter start.
///
/// Instrument: `counter`. Unit: `{collection}`.
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_COLLECTIONS: &str = "cpython.gc.collections";

/// The number of uncollectable objects found inside a generation since interpreter start.
///
/// Instrument: `counter`. Unit: `{object}`.
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_UNCOLLECTABLE_OBJECTS: &str = "cpython.gc.uncollectable_objects";

/// The number of .NET assemblies that are currently loaded.
///
/// Instrument: `updowncounter`. Unit: `{assembly}`.
pub const DOTNET_ASSEMBLY_COUNT: &str = "dotnet.assembly.count";

/// The number of exceptions that have been thrown in managed code.
///
/// Instrument: `counter`. Unit: `{exception}`.
pub const DOTNET_EXCEPTIONS: &str = "dotnet.exceptions";

/// The number of garbage collections that have occurred since the process has started.
///
/// Instrument: `counter`. Unit: `{collection}`.
pub const DOTNET_GC_COLLECTIONS: &str = "dotnet.gc.collections";

/// The *approximate* number of bytes allocated on the managed GC heap since the process has started.
///
/// Instrument: `counter`. Unit: `By`.
pub const DOTNET_GC_HEAP_TOTAL_ALLOCATED: &str = "dotnet.gc.heap.total_allocated";

/// The heap fragmentation, as observed during the latest garbage collection.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE: &str =
    "dotnet.gc.last_collection.heap.fragmentation.size";

/// The managed GC heap size (including fragmentation), as observed during the latest garbage collection.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const DOTNET_GC_LAST_COLLECTION_HEAP_SIZE: &str = "dotnet.gc.last_collection.heap.size";

/// The amount of committed virtual memory in use by the .NET GC, as observed during the latest garbage collection.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE: &str =
    "dotnet.gc.last_collection.memory.committed_size";

/// The total amount of time paused in GC since the process has started.
///
/// Instrument: `counter`. Unit: `s`.
pub const DOTNET_GC_PAUSE_TIME: &str = "dotnet.gc.pause.time";

/// The amount of time the JIT compiler has spent compiling methods since the process has started.
///
/// Instrument: `counter`. Unit: `s`.
pub const DOTNET_JIT_COMPILATION_TIME: &str = "dotnet.jit.compilation.time";

/// Count of bytes of intermediate language that have been compiled since the process has started.
///
/// Instrument: `counter`. Unit: `By`.
pub const DOTNET_JIT_COMPILED_IL_SIZE: &str = "dotnet.jit.compiled_il.size";

/// The number of times the JIT compiler (re)compiled methods since the process has started.
///
/// Instrument: `counter`. Unit: `{method}`.
pub const DOTNET_JIT_COMPILED_METHODS: &str = "dotnet.jit.compiled_methods";

/// The number of times there was contention when trying to acquire a monitor lock since the process has started.
///
/// Instrument: `counter`. Unit: `{contention}`.
pub const DOTNET_MONITOR_LOCK_CONTENTIONS: &str = "dotnet.monitor.lock_contentions";

/// The number of processors available to the process.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
pub const DOTNET_PROCESS_CPU_COUNT: &str = "dotnet.process.cpu.count";

/// CPU time used by the process.
///
/// Instrument: `counter`. Unit: `s`.
pub const DOTNET_PROCESS_CPU_TIME: &str = "dotnet.process.cpu.time";

/// The number of bytes of physical memory mapped to the process context.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const DOTNET_PROCESS_MEMORY_WORKING_SET: &str = "dotnet.process.memory.working_set";

/// The number of work items that are currently queued to be processed by the thread pool.
///
/// Instrument: `counter`. Unit: `{work_item}`.
pub const DOTNET_THREAD_POOL_QUEUE_LENGTH: &str = "dotnet.thread_pool.queue.length";

/// The number of thread pool threads that currently exist.
///
/// Instrument: `updowncounter`. Unit: `{thread}`.
pub const DOTNET_THREAD_POOL_THREAD_COUNT: &str = "dotnet.thread_pool.thread.count";

/// The number of work items that the thread pool has completed since the process has started.
///
/// Instrument: `counter`. Unit: `{work_item}`.
pub const DOTNET_THREAD_POOL_WORK_ITEM_COUNT: &str = "dotnet.thread_pool.work_item.count";

/// The number of timer instances that are currently active.
///
/// Instrument: `updowncounter`. Unit: `{timer}`.
pub const DOTNET_TIMER_COUNT: &str = "dotnet.timer.count";

/// Heap size target percentage configured by the user, otherwise 100.
///
/// Instrument: `updowncounter`. Unit: `%`.
#[cfg(feature = "semconv_experimental")]
pub const GO_CONFIG_GOGC: &str = "go.config.gogc";

/// Count of live goroutines.
///
/// Instrument: `updowncounter`. Unit: `{goroutine}`.
#[cfg(feature = "semconv_experimental")]
pub const GO_GOROUTINE_COUNT: &str = "go.goroutine.count";

/// Memory allocated to the heap by the application.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATED: &str = "go.memory.allocated";

/// Count of allocations to the heap by the application.
///
/// Instrument: `counter`. Unit: `{allocation}`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_ALLOCATIONS: &str = "go.memory.allocations";

/// Heap size target for the end of the GC cycle.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_GC_GOAL: &str = "go.memory.gc.goal";

/// Go runtime memory limit configured by the user, if a limit exists.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_LIMIT: &str = "go.memory.limit";

/// Memory used by the Go runtime.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_USED: &str = "go.memory.used";

/// The number of OS threads that can execute user-level Go code simultaneously.
///
/// Instrument: `updowncounter`. Unit: `{thread}`.
#[cfg(feature = "semconv_experimental")]
pub const GO_PROCESSOR_LIMIT: &str = "go.processor.limit";

/// The time goroutines have spent in the scheduler in a runnable state before actually running.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GO_SCHEDULE_DURATION: &str = "go.schedule.duration";

/// Number of buffers in the pool.
///
/// Instrument: `updowncounter`. Unit: `{buffer}`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_COUNT: &str = "jvm.buffer.count";

/// Measure of total memory capacity of buffers.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_LIMIT: &str = "jvm.buffer.memory.limit";

/// Deprecated, use `jvm.buffer.memory.used` instead.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `jvm.buffer.memory.used`.")]
pub const JVM_BUFFER_MEMORY_USAGE: &str = "jvm.buffer.memory.usage";

/// Measure of memory used by buffers.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_MEMORY_USED: &str = "jvm.buffer.memory.used";

/// Number of classes currently loaded.
///
/// Instrument: `updowncounter`. Unit: `{class}`.
pub const JVM_CLASS_COUNT: &str = "jvm.class.count";

/// Number of classes loaded since JVM start.
///
/// Instrument: `counter`. Unit: `{class}`.
pub const JVM_CLASS_LOADED: &str = "jvm.class.loaded";

/// Number of classes unloaded since JVM start.
///
/// Instrument: `counter`. Unit: `{class}`.
pub const JVM_CLASS_UNLOADED: &str = "jvm.class.unloaded";

/// Number of processors available to the Java virtual machine.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
pub const JVM_CPU_COUNT: &str = "jvm.cpu.count";

/// Recent CPU utilization for the process as reported by the JVM.
///
/// Instrument: `gauge`. Unit: `1`.
pub const JVM_CPU_RECENT_UTILIZATION: &str = "jvm.cpu.recent_utilization";

/// CPU time used by the process as reported by the JVM.
///
/// Instrument: `counter`. Unit: `s`.
pub const JVM_CPU_TIME: &str = "jvm.cpu.time";

/// Number of open file descriptors as reported by the JVM.
///
/// Instrument: `updowncounter`. Unit: `{file_descriptor}`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_FILE_DESCRIPTOR_COUNT: &str = "jvm.file_descriptor.count";

/// Duration of JVM garbage collection actions.
///
/// Instrument: `histogram`. Unit: `s`.
pub const JVM_GC_DURATION: &str = "jvm.gc.duration";

/// Measure of memory committed.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const JVM_MEMORY_COMMITTED: &str = "jvm.memory.committed";

/// Measure of initial memory requested.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_MEMORY_INIT: &str = "jvm.memory.init";

/// Measure of max obtainable memory.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const JVM_MEMORY_LIMIT: &str = "jvm.memory.limit";

/// Measure of memory used.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const JVM_MEMORY_USED: &str = "jvm.memory.used";

/// Measure of memory used, as measured after the most recent garbage collection event on this pool.
///
/// Instrument: `updowncounter`. Unit: `By`.
pub const JVM_MEMORY_USED_AFTER_LAST_GC: &str = "jvm.memory.used_after_last_gc";

/// Average CPU load of the whole system for the last minute as reported by the JVM.
///
/// Instrument: `gauge`. Unit: `{run_queue_item}`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_LOAD_1M: &str = "jvm.system.cpu.load_1m";

/// Recent CPU utilization for the whole system as reported by the JVM.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_SYSTEM_CPU_UTILIZATION: &str = "jvm.system.cpu.utilization";

/// Number of executing platform threads.
///
/// Instrument: `updowncounter`. Unit: `{thread}`.
pub const JVM_THREAD_COUNT: &str = "jvm.thread.count";

/// Event loop maximum delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MAX: &str = "nodejs.eventloop.delay.max";

/// Event loop mean delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MEAN: &str = "nodejs.eventloop.delay.mean";

/// Event loop minimum delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_MIN: &str = "nodejs.eventloop.delay.min";

/// Event loop 50 percentile delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P50: &str = "nodejs.eventloop.delay.p50";

/// Event loop 90 percentile delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P90: &str = "nodejs.eventloop.delay.p90";

/// Event loop 99 percentile delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_P99: &str = "nodejs.eventloop.delay.p99";

/// Event loop standard deviation delay.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_DELAY_STDDEV: &str = "nodejs.eventloop.delay.stddev";

/// Cumulative duration of time the event loop has been in each state.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_TIME: &str = "nodejs.eventloop.time";

/// Event loop utilization.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_UTILIZATION: &str = "nodejs.eventloop.utilization";

/// Garbage collection duration.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_DURATION: &str = "v8js.gc.duration";

/// Heap space available size.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_AVAILABLE_SIZE: &str = "v8js.heap.space.available_size";

/// Committed size of a heap space.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_PHYSICAL_SIZE: &str = "v8js.heap.space.physical_size";

/// Total heap memory size pre-allocated.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_LIMIT: &str = "v8js.memory.heap.limit";

/// Heap Memory size allocated.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_MEMORY_HEAP_USED: &str = "v8js.memory.heap.used";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "CPYTHON_GC_COLLECTED_OBJECTS",
        "cpython.gc.collected_objects",
        Counter,
        "{object}",
        Experimental,
    ),
    Entry::metric(
        "CPYTHON_GC_COLLECTIONS",
        "cpython.gc.collections",
        Counter,
        "{collection}",
        Experimental,
    ),
    Entry::metric(
        "CPYTHON_GC_UNCOLLECTABLE_OBJECTS",
        "cpython.gc.uncollectable_objects",
        Counter,
        "{object}",
        Experimental,
    ),
    Entry::metric(
        "DOTNET_ASSEMBLY_COUNT",
        "dotnet.assembly.count",
        UpDownCounter,
        "{assembly}",
        Stable,
    ),
    Entry::metric("DOTNET_EXCEPTIONS", "dotnet.exceptions", Counter, "{exception}", Stable),
    Entry::metric(
        "DOTNET_GC_COLLECTIONS",
        "dotnet.gc.collections",
        Counter,
        "{collection}",
        Stable,
    ),
    Entry::metric(
        "DOTNET_GC_HEAP_TOTAL_ALLOCATED",
        "dotnet.gc.heap.total_allocated",
        Counter,
        "By",
        Stable,
    ),
    Entry::metric(
        "DOTNET_GC_LAST_COLLECTION_HEAP_FRAGMENTATION_SIZE",
        "dotnet.gc.last_collection.heap.fragmentation.size",
        UpDownCounter,
        "By",
        Stable,
    ),
    Entry::metric(
        "DOTNET_GC_LAST_COLLECTION_HEAP_SIZE",
        "dotnet.gc.last_collection.heap.size",
        UpDownCounter,
        "By",
        Stable,
    ),
    Entry::metric(
        "DOTNET_GC_LAST_COLLECTION_MEMORY_COMMITTED_SIZE",
        "dotnet.gc.last_collection.memory.committed_size",
        UpDownCounter,
        "By",
        Stable,
    ),
    Entry::metric("DOTNET_GC_PAUSE_TIME", "dotnet.gc.pause.time", Counter, "s", Stable),
    Entry::metric(
        "DOTNET_JIT_COMPILATION_TIME",
        "dotnet.jit.compilation.time",
        Counter,
        "s",
        Stable,
    ),
    Entry::metric(
        "DOTNET_JIT_COMPILED_IL_SIZE",
        "dotnet.jit.compiled_il.size",
        Counter,
        "By",
        Stable,
    ),
    Entry::metric(
        "DOTNET_JIT_COMPILED_METHODS",
        "dotnet.jit.compiled_methods",
        Counter,
        "{method}",
        Stable,
    ),
    Entry::metric(
        "DOTNET_MONITOR_LOCK_CONTENTIONS",
        "dotnet.monitor.lock_contentions",
        Counter,
        "{contention}",
        Stable,
    ),
    Entry::metric(
        "DOTNET_PROCESS_CPU_COUNT",
        "dotnet.process.cpu.count",
        UpDownCounter,
        "{cpu}",
        Stable,
    ),
    Entry::metric("DOTNET_PROCESS_CPU_TIME", "dotnet.process.cpu.time", Counter, "s", Stable),
    Entry::metric(
        "DOTNET_PROCESS_MEMORY_WORKING_SET",
        "dotnet.process.memory.working_set",
        UpDownCounter,
        "By",
        Stable,
    ),
    Entry::metric(
        "DOTNET_THREAD_POOL_QUEUE_LENGTH",
        "dotnet.thread_pool.queue.length",
        Counter,
        "{work_item}",
        Stable,
    ),
    Entry::metric(
        "DOTNET_THREAD_POOL_THREAD_COUNT",
        "dotnet.thread_pool.thread.count",
        UpDownCounter,
        "{thread}",
        Stable,
    ),
    Entry::metric(
        "DOTNET_THREAD_POOL_WORK_ITEM_COUNT",
        "dotnet.thread_pool.work_item.count",
        Counter,
        "{work_item}",
        Stable,
    ),
    Entry::metric("DOTNET_TIMER_COUNT", "dotnet.timer.count", UpDownCounter, "{timer}", Stable),
    Entry::metric("GO_CONFIG_GOGC", "go.config.gogc", UpDownCounter, "%", Experimental),
    Entry::metric(
        "GO_GOROUTINE_COUNT",
        "go.goroutine.count",
        UpDownCounter,
        "{goroutine}",
        Experimental,
    ),
    Entry::metric("GO_MEMORY_ALLOCATED", "go.memory.allocated", Counter, "By", Experimental),
    Entry::metric(
        "GO_MEMORY_ALLOCATIONS",
        "go.memory.allocations",
        Counter,
        "{allocation}",
        Experimental,
    ),
    Entry::metric("GO_MEMORY_GC_GOAL", "go.memory.gc.goal", UpDownCounter, "By", Experimental),
    Entry::metric("GO_MEMORY_LIMIT", "go.memory.limit", UpDownCounter, "By", Experimental),
    Entry::metric("GO_MEMORY_USED", "go.memory.used", UpDownCounter, "By", Experimental),
    Entry::metric(
        "GO_PROCESSOR_LIMIT",
        "go.processor.limit",
        UpDownCounter,
        "{thread}",
        Experimental,
    ),
    Entry::metric("GO_SCHEDULE_DURATION", "go.schedule.duration", Histogram, "s", Experimental),
    Entry::metric("JVM_BUFFER_COUNT", "jvm.buffer.count", UpDownCounter, "{buffer}", Experimental),
    Entry::metric(
        "JVM_BUFFER_MEMORY_LIMIT",
        "jvm.buffer.memory.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "JVM_BUFFER_MEMORY_USAGE",
        "jvm.buffer.memory.usage",
        UpDownCounter,
        "By",
        Experimental,
    )
    .deprecated(Renamed("jvm.buffer.memory.used")),
    Entry::metric(
        "JVM_BUFFER_MEMORY_USED",
        "jvm.buffer.memory.used",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("JVM_CLASS_COUNT", "jvm.class.count", UpDownCounter, "{class}", Stable),
    Entry::metric("JVM_CLASS_LOADED", "jvm.class.loaded", Counter, "{class}", Stable),
    Entry::metric("JVM_CLASS_UNLOADED", "jvm.class.unloaded", Counter, "{class}", Stable),
    Entry::metric("JVM_CPU_COUNT", "jvm.cpu.count", UpDownCounter, "{cpu}", Stable),
    Entry::metric("JVM_CPU_RECENT_UTILIZATION", "jvm.cpu.recent_utilization", Gauge, "1", Stable),
    Entry::metric("JVM_CPU_TIME", "jvm.cpu.time", Counter, "s", Stable),
    Entry::metric(
        "JVM_FILE_DESCRIPTOR_COUNT",
        "jvm.file_descriptor.count",
        UpDownCounter,
        "{file_descriptor}",
        Experimental,
    ),
    Entry::metric("JVM_GC_DURATION", "jvm.gc.duration", Histogram, "s", Stable),
    Entry::metric("JVM_MEMORY_COMMITTED", "jvm.memory.committed", UpDownCounter, "By", Stable),
    Entry::metric("JVM_MEMORY_INIT", "jvm.memory.init", UpDownCounter, "By", Experimental),
    Entry::metric("JVM_MEMORY_LIMIT", "jvm.memory.limit", UpDownCounter, "By", Stable),
    Entry::metric("JVM_MEMORY_USED", "jvm.memory.used", UpDownCounter, "By", Stable),
    Entry::metric(
        "JVM_MEMORY_USED_AFTER_LAST_GC",
        "jvm.memory.used_after_last_gc",
        UpDownCounter,
        "By",
        Stable,
    ),
    Entry::metric(
        "JVM_SYSTEM_CPU_LOAD_1M",
        "jvm.system.cpu.load_1m",
        Gauge,
        "{run_queue_item}",
        Experimental,
    ),
    Entry::metric(
        "JVM_SYSTEM_CPU_UTILIZATION",
        "jvm.system.cpu.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("JVM_THREAD_COUNT", "jvm.thread.count", UpDownCounter, "{thread}", Stable),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_MAX",
        "nodejs.eventloop.delay.max",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_MEAN",
        "nodejs.eventloop.delay.mean",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_MIN",
        "nodejs.eventloop.delay.min",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_P50",
        "nodejs.eventloop.delay.p50",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_P90",
        "nodejs.eventloop.delay.p90",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_P99",
        "nodejs.eventloop.delay.p99",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric(
        "NODEJS_EVENTLOOP_DELAY_STDDEV",
        "nodejs.eventloop.delay.stddev",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric("NODEJS_EVENTLOOP_TIME", "nodejs.eventloop.time", Counter, "s", Experimental),
    Entry::metric(
        "NODEJS_EVENTLOOP_UTILIZATION",
        "nodejs.eventloop.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("V8JS_GC_DURATION", "v8js.gc.duration", Histogram, "s", Experimental),
    Entry::metric(
        "V8JS_HEAP_SPACE_AVAILABLE_SIZE",
        "v8js.heap.space.available_size",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "V8JS_HEAP_SPACE_PHYSICAL_SIZE",
        "v8js.heap.space.physical_size",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "V8JS_MEMORY_HEAP_LIMIT",
        "v8js.memory.heap.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "V8JS_MEMORY_HEAP_USED",
        "v8js.memory.heap.used",
        UpDownCounter,
        "By",
        Experimental,
    ),
];
