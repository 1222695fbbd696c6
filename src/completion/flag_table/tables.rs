use super::FlagEntry;

/// Top-level commands offered when no command has been recognized yet.
pub static ROOT_COMMANDS: &[FlagEntry] = &[
    FlagEntry::new("attach", "Attach local standard input, output, and error streams to a running container"),
    FlagEntry::new("build", "Build an image from a Dockerfile"),
    FlagEntry::new("builder", "Manage builds"),
    FlagEntry::new("checkpoint", "Manage checkpoints"),
    FlagEntry::new("commit", "Create a new image from a container’s changes"),
    FlagEntry::new("config", "Manage Docker configs"),
    FlagEntry::new("container", "Manage containers"),
    FlagEntry::new("context", "Manage contexts"),
    FlagEntry::new("cp", "Copy files/folders between a container and the local filesystem"),
    FlagEntry::new("create", "Create a new container"),
    FlagEntry::new("diff", "Inspect changes to files or directories on a container’s filesystem"),
    FlagEntry::new("events", "Get real time events from the server"),
    FlagEntry::new("exec", "Run a command in a running container"),
    FlagEntry::new("export", "Export a container’s filesystem as a tar archive"),
    FlagEntry::new("history", "Show the history of an image"),
    FlagEntry::new("image", "Manage images"),
    FlagEntry::new("images", "List images"),
    FlagEntry::new("import", "Import the contents from a tarball to create a filesystem image"),
    FlagEntry::new("info", "Display system-wide information"),
    FlagEntry::new("inspect", "Return low-level information on Docker objects"),
    FlagEntry::new("kill", "Kill one or more running containers"),
    FlagEntry::new("load", "Load an image from a tar archive or STDIN"),
    FlagEntry::new("login", "Log in to a Docker registry"),
    FlagEntry::new("logout", "Log out from a Docker registry"),
    FlagEntry::new("logs", "Fetch the logs of a container"),
    FlagEntry::new("manifest", "Manage Docker image manifests and manifest lists"),
    FlagEntry::new("network", "Manage networks"),
    FlagEntry::new("node", "Manage Swarm nodes"),
    FlagEntry::new("pause", "Pause all processes within one or more containers"),
    FlagEntry::new("plugin", "Manage plugins"),
    FlagEntry::new("port", "List port mappings or a specific mapping for the container"),
    FlagEntry::new("ps", "List containers"),
    FlagEntry::new("pull", "Pull an image or a repository from a registry"),
    FlagEntry::new("push", "Push an image or a repository to a registry"),
    FlagEntry::new("rename", "Rename a container"),
    FlagEntry::new("restart", "Restart one or more containers"),
    FlagEntry::new("rm", "Remove one or more containers"),
    FlagEntry::new("rmi", "Remove one or more images"),
    FlagEntry::new("run", "Run a command in a new container"),
    FlagEntry::new("save", "Save one or more images to a tar archive (streamed to STDOUT by default)"),
    FlagEntry::new("search", "Search the Docker Hub for images"),
    FlagEntry::new("secret", "Manage Docker secrets"),
    FlagEntry::new("service", "Manage services"),
    FlagEntry::new("stack", "Manage Docker stacks"),
    FlagEntry::new("start", "Start one or more stopped containers"),
    FlagEntry::new("stats", "Display a live stream of container(s) resource usage statistics"),
    FlagEntry::new("stop", "Stop one or more running containers"),
    FlagEntry::new("swarm", "Manage Swarm"),
    FlagEntry::new("system", "Manage Docker"),
    FlagEntry::new("tag", "Create a tag TARGET_IMAGE that refers to SOURCE_IMAGE"),
    FlagEntry::new("top", "Display the running processes of a container"),
    FlagEntry::new("trust", "Manage trust on Docker images"),
    FlagEntry::new("unpause", "Unpause all processes within one or more containers"),
    FlagEntry::new("update", "Update configuration of one or more containers"),
    FlagEntry::new("version", "Show the Docker version information"),
    FlagEntry::new("volume", "Manage volumes"),
    FlagEntry::new("wait", "Block until one or more containers stop, then print their exit codes"),
    FlagEntry::new("exit", "Exit command prompt"),
];

/// Flag (and sub-command) tables keyed by command, compound keys included.
pub static COMMAND_FLAGS: &[(&str, &[FlagEntry])] = &[
    (
        "attach",
        &[
            FlagEntry::new("--detach-keys", "Override the key sequence for detaching a container"),
            FlagEntry::new("--no-stdin", "Do not attach STDIN"),
            FlagEntry::new("--sig-proxy", "Proxy all received signals to the process"),
        ],
    ),
    (
        "build",
        &[
            FlagEntry::new("--add-host", "Add a custom host-to-IP mapping (host:ip)"),
            FlagEntry::new("--build-arg", "Set build-time variables"),
            FlagEntry::new("--cache-from", "Images to consider as cache sources"),
            FlagEntry::new("--cgroup-parent", "Optional parent cgroup for the container"),
            FlagEntry::new("--compress", "Compress the build context using gzip"),
            FlagEntry::new("--cpu-period", "Limit the CPU CFS (Completely Fair Scheduler) period"),
            FlagEntry::new("--cpu-quota", "Limit the CPU CFS (Completely Fair Scheduler) quota"),
            FlagEntry::new("--cpu-shares", "CPU shares (relative weight)"),
            FlagEntry::new("--cpuset-cpus", "CPUs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--cpuset-mems", "MEMs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--disable-content-trust", "Skip image verification"),
            FlagEntry::new("--file", "Name of the Dockerfile (Default is ‘PATH/Dockerfile’)"),
            FlagEntry::new("--force-rm", "Always remove intermediate containers"),
            FlagEntry::new("--iidfile", "Write the image ID to the file"),
            FlagEntry::new("--isolation", "Container isolation technology"),
            FlagEntry::new("--label", "Set metadata for an image"),
            FlagEntry::new("--memory", "Memory limit"),
            FlagEntry::new("--memory-swap", "Swap limit equal to memory plus swap: ‘-1’ to enable unlimited swap"),
            FlagEntry::new("--network", ""),
            FlagEntry::new("--no-cache", "Do not use cache when building the image"),
            FlagEntry::new("--output", ""),
            FlagEntry::new("--platform", ""),
            FlagEntry::new("--progress", "Set type of progress output (auto, plain, tty). Use plain to show container output"),
            FlagEntry::new("--pull", "Always attempt to pull a newer version of the image"),
            FlagEntry::new("--quiet", "Suppress the build output and print image ID on success"),
            FlagEntry::new("--rm", "Remove intermediate containers after a successful build"),
            FlagEntry::new("--secret", ""),
            FlagEntry::new("--security-opt", "Security options"),
            FlagEntry::new("--shm-size", "Size of /dev/shm"),
            FlagEntry::new("--squash", ""),
            FlagEntry::new("--ssh", ""),
            FlagEntry::new("--stream", ""),
            FlagEntry::new("--tag", "Name and optionally a tag in the ‘name:tag’ format"),
            FlagEntry::new("--target", "Set the target build stage to build."),
            FlagEntry::new("--ulimit", "Ulimit options"),
        ],
    ),
    (
        "commit",
        &[
            FlagEntry::new("--author", "Author (e.g., “John Hannibal Smith "),
            FlagEntry::new("--change", "Apply Dockerfile instruction to the created image"),
            FlagEntry::new("--message", "Commit message"),
            FlagEntry::new("--pause", "Pause container during commit"),
        ],
    ),
    (
        "cp",
        &[
            FlagEntry::new("--archive", "Archive mode (copy all uid/gid information)"),
            FlagEntry::new("--follow-link", "Always follow symbol link in SRC_PATH"),
        ],
    ),
    (
        "create",
        &[
            FlagEntry::new("--add-host", "Add a custom host-to-IP mapping (host:ip)"),
            FlagEntry::new("--attach", "Attach to STDIN, STDOUT or STDERR"),
            FlagEntry::new("--blkio-weight", "Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)"),
            FlagEntry::new("--blkio-weight-device", "Block IO weight (relative device weight)"),
            FlagEntry::new("--cap-add", "Add Linux capabilities"),
            FlagEntry::new("--cap-drop", "Drop Linux capabilities"),
            FlagEntry::new("--cgroup-parent", "Optional parent cgroup for the container"),
            FlagEntry::new("--cidfile", "Write the container ID to the file"),
            FlagEntry::new("--cpu-count", "CPU count (Windows only)"),
            FlagEntry::new("--cpu-percent", "CPU percent (Windows only)"),
            FlagEntry::new("--cpu-period", "Limit CPU CFS (Completely Fair Scheduler) period"),
            FlagEntry::new("--cpu-quota", "Limit CPU CFS (Completely Fair Scheduler) quota"),
            FlagEntry::new("--cpu-rt-period", ""),
            FlagEntry::new("--cpu-rt-runtime", ""),
            FlagEntry::new("--cpu-shares", "CPU shares (relative weight)"),
            FlagEntry::new("--cpus", ""),
            FlagEntry::new("--cpuset-cpus", "CPUs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--cpuset-mems", "MEMs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--device", "Add a host device to the container"),
            FlagEntry::new("--device-cgroup-rule", "Add a rule to the cgroup allowed devices list"),
            FlagEntry::new("--device-read-bps", "Limit read rate (bytes per second) from a device"),
            FlagEntry::new("--device-read-iops", "Limit read rate (IO per second) from a device"),
            FlagEntry::new("--device-write-bps", "Limit write rate (bytes per second) to a device"),
            FlagEntry::new("--device-write-iops", "Limit write rate (IO per second) to a device"),
            FlagEntry::new("--disable-content-trust", "Skip image verification"),
            FlagEntry::new("--dns", "Set custom DNS servers"),
            FlagEntry::new("--dns-opt", "Set DNS options"),
            FlagEntry::new("--dns-option", "Set DNS options"),
            FlagEntry::new("--dns-search", "Set custom DNS search domains"),
            FlagEntry::new("--domainname", "Container NIS domain name"),
            FlagEntry::new("--entrypoint", "Overwrite the default ENTRYPOINT of the image"),
            FlagEntry::new("--env", "Set environment variables"),
            FlagEntry::new("--env-file", "Read in a file of environment variables"),
            FlagEntry::new("--expose", "Expose a port or a range of ports"),
            FlagEntry::new("--gpus", ""),
            FlagEntry::new("--group-add", "Add additional groups to join"),
            FlagEntry::new("--health-cmd", "Command to run to check health"),
            FlagEntry::new("--health-interval", "Time between running the check (ms|s|m|h) (default 0s)"),
            FlagEntry::new("--health-retries", "Consecutive failures needed to report unhealthy"),
            FlagEntry::new("--health-start-period", ""),
            FlagEntry::new("--health-timeout", "Maximum time to allow one check to run (ms|s|m|h) (default 0s)"),
            FlagEntry::new("--help", "Print usage"),
            FlagEntry::new("--hostname", "Container host name"),
            FlagEntry::new("--init", ""),
            FlagEntry::new("--interactive", "Keep STDIN open even if not attached"),
            FlagEntry::new("--io-maxbandwidth", "Maximum IO bandwidth limit for the system drive (Windows only)"),
            FlagEntry::new("--io-maxiops", "Maximum IOps limit for the system drive (Windows only)"),
            FlagEntry::new("--ip", "IPv4 address (e.g., 172.30.100.104)"),
            FlagEntry::new("--ip6", "IPv6 address (e.g., 2001:db8::33)"),
            FlagEntry::new("--ipc", "IPC mode to use"),
            FlagEntry::new("--isolation", "Container isolation technology"),
            FlagEntry::new("--kernel-memory", "Kernel memory limit"),
            FlagEntry::new("--label", "Set meta data on a container"),
            FlagEntry::new("--label-file", "Read in a line delimited file of labels"),
            FlagEntry::new("--link", "Add link to another container"),
            FlagEntry::new("--link-local-ip", "Container IPv4/IPv6 link-local addresses"),
            FlagEntry::new("--log-driver", "Logging driver for the container"),
            FlagEntry::new("--log-opt", "Log driver options"),
            FlagEntry::new("--mac-address", "Container MAC address (e.g., 92:d0:c6:0a:29:33)"),
            FlagEntry::new("--memory", "Memory limit"),
            FlagEntry::new("--memory-reservation", "Memory soft limit"),
            FlagEntry::new("--memory-swap", "Swap limit equal to memory plus swap: ‘-1’ to enable unlimited swap"),
            FlagEntry::new("--memory-swappiness", "Tune container memory swappiness (0 to 100)"),
            FlagEntry::new("--mount", "Attach a filesystem mount to the container"),
            FlagEntry::new("--name", "Assign a name to the container"),
            FlagEntry::new("--net", "Connect a container to a network"),
            FlagEntry::new("--net-alias", "Add network-scoped alias for the container"),
            FlagEntry::new("--network", "Connect a container to a network"),
            FlagEntry::new("--network-alias", "Add network-scoped alias for the container"),
            FlagEntry::new("--no-healthcheck", "Disable any container-specified HEALTHCHECK"),
            FlagEntry::new("--oom-kill-disable", "Disable OOM Killer"),
            FlagEntry::new("--oom-score-adj", "Tune host’s OOM preferences (-1000 to 1000)"),
            FlagEntry::new("--pid", "PID namespace to use"),
            FlagEntry::new("--pids-limit", "Tune container pids limit (set -1 for unlimited)"),
            FlagEntry::new("--platform", ""),
            FlagEntry::new("--privileged", "Give extended privileges to this container"),
            FlagEntry::new("--publish", "Publish a container’s port(s) to the host"),
            FlagEntry::new("--publish-all", "Publish all exposed ports to random ports"),
            FlagEntry::new("--read-only", "Mount the container’s root filesystem as read only"),
            FlagEntry::new("--restart", "Restart policy to apply when a container exits"),
            FlagEntry::new("--rm", "Automatically remove the container when it exits"),
            FlagEntry::new("--runtime", "Runtime to use for this container"),
            FlagEntry::new("--security-opt", "Security Options"),
            FlagEntry::new("--shm-size", "Size of /dev/shm"),
            FlagEntry::new("--stop-signal", "Signal to stop a container"),
            FlagEntry::new("--stop-timeout", ""),
            FlagEntry::new("--storage-opt", "Storage driver options for the container"),
            FlagEntry::new("--sysctl", "Sysctl options"),
            FlagEntry::new("--tmpfs", "Mount a tmpfs directory"),
            FlagEntry::new("--tty", "Allocate a pseudo-TTY"),
            FlagEntry::new("--ulimit", "Ulimit options"),
            FlagEntry::new("--user", "Username or UID (format: &lt;name|uid&gt;[:&lt;group|gid&gt;])"),
            FlagEntry::new("--userns", "User namespace to use"),
            FlagEntry::new("--uts", "UTS namespace to use"),
            FlagEntry::new("--volume", "Bind mount a volume"),
            FlagEntry::new("--volume-driver", "Optional volume driver for the container"),
            FlagEntry::new("--volumes-from", "Mount volumes from the specified container(s)"),
            FlagEntry::new("--workdir", "Working directory inside the container"),
        ],
    ),
    (
        "events",
        &[
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Format the output using the given Go template"),
            FlagEntry::new("--since", "Show all events created since timestamp"),
            FlagEntry::new("--until", "Stream events until this timestamp"),
        ],
    ),
    (
        "exec",
        &[
            FlagEntry::new("--detach", "Detached mode: run command in the background"),
            FlagEntry::new("--detach-keys", "Override the key sequence for detaching a container"),
            FlagEntry::new("--env", ""),
            FlagEntry::new("--interactive", "Keep STDIN open even if not attached"),
            FlagEntry::new("--privileged", "Give extended privileges to the command"),
            FlagEntry::new("--tty", "Allocate a pseudo-TTY"),
            FlagEntry::new("--user", "Username or UID (format: &lt;name|uid&gt;[:&lt;group|gid&gt;])"),
            FlagEntry::new("--workdir", ""),
        ],
    ),
    (
        "export",
        &[
            FlagEntry::new("--output", "Write to a file, instead of STDOUT"),
        ],
    ),
    (
        "history",
        &[
            FlagEntry::new("--format", "Pretty-print images using a Go template"),
            FlagEntry::new("--human", "Print sizes and dates in human readable format"),
            FlagEntry::new("--no-trunc", "Don’t truncate output"),
            FlagEntry::new("--quiet", "Only show numeric IDs"),
        ],
    ),
    (
        "images",
        &[
            FlagEntry::new("--all", "Show all images (default hides intermediate images)"),
            FlagEntry::new("--digests", "Show digests"),
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Pretty-print images using a Go template"),
            FlagEntry::new("--no-trunc", "Don’t truncate output"),
            FlagEntry::new("--quiet", "Only show numeric IDs"),
        ],
    ),
    (
        "import",
        &[
            FlagEntry::new("--change", "Apply Dockerfile instruction to the created image"),
            FlagEntry::new("--message", "Set commit message for imported image"),
            FlagEntry::new("--platform", ""),
        ],
    ),
    (
        "info",
        &[
            FlagEntry::new("--format", "Format the output using the given Go template"),
        ],
    ),
    (
        "inspect",
        &[
            FlagEntry::new("--format", "Format the output using the given Go template"),
            FlagEntry::new("--size", "Display total file sizes if the type is container"),
            FlagEntry::new("--type", "Return JSON for specified type"),
        ],
    ),
    (
        "kill",
        &[
            FlagEntry::new("--signal", "Signal to send to the container"),
        ],
    ),
    (
        "load",
        &[
            FlagEntry::new("--input", "Read from tar archive file, instead of STDIN"),
            FlagEntry::new("--quiet", "Suppress the load output"),
        ],
    ),
    (
        "login",
        &[
            FlagEntry::new("--password", "Password"),
            FlagEntry::new("--password-stdin", "Take the password from stdin"),
            FlagEntry::new("--username", "Username"),
        ],
    ),
    (
        "logs",
        &[
            FlagEntry::new("--details", "Show extra details provided to logs"),
            FlagEntry::new("--follow", "Follow log output"),
            FlagEntry::new("--since", "Show logs since timestamp (e.g. 2013-01-02T13:23:37) or relative (e.g. 42m for 42 minutes)"),
            FlagEntry::new("--tail", "Number of lines to show from the end of the logs"),
            FlagEntry::new("--timestamps", "Show timestamps"),
            FlagEntry::new("--until", ""),
        ],
    ),
    (
        "ps",
        &[
            FlagEntry::new("--all", "Show all containers (default shows just running)"),
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Pretty-print containers using a Go template"),
            FlagEntry::new("--last", "Show n last created containers (includes all states)"),
            FlagEntry::new("--latest", "Show the latest created container (includes all states)"),
            FlagEntry::new("--no-trunc", "Don’t truncate output"),
            FlagEntry::new("--quiet", "Only display numeric IDs"),
            FlagEntry::new("--size", "Display total file sizes"),
        ],
    ),
    (
        "pull",
        &[
            FlagEntry::new("--all-tags", "Download all tagged images in the repository"),
            FlagEntry::new("--disable-content-trust", "Skip image verification"),
            FlagEntry::new("--platform", ""),
            FlagEntry::new("--quiet", "Suppress verbose output"),
        ],
    ),
    (
        "push",
        &[
            FlagEntry::new("--disable-content-trust", "Skip image signing"),
        ],
    ),
    (
        "restart",
        &[
            FlagEntry::new("--time", "Seconds to wait for stop before killing the container"),
        ],
    ),
    (
        "rm",
        &[
            FlagEntry::new("--force", "Force the removal of a running container (uses SIGKILL)"),
            FlagEntry::new("--link", "Remove the specified link"),
            FlagEntry::new("--volumes", "Remove the volumes associated with the container"),
        ],
    ),
    (
        "rmi",
        &[
            FlagEntry::new("--force", "Force removal of the image"),
            FlagEntry::new("--no-prune", "Do not delete untagged parents"),
        ],
    ),
    (
        "run",
        &[
            FlagEntry::new("--add-host", "Add a custom host-to-IP mapping (host:ip)"),
            FlagEntry::new("--attach", "Attach to STDIN, STDOUT or STDERR"),
            FlagEntry::new("--blkio-weight", "Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)"),
            FlagEntry::new("--blkio-weight-device", "Block IO weight (relative device weight)"),
            FlagEntry::new("--cap-add", "Add Linux capabilities"),
            FlagEntry::new("--cap-drop", "Drop Linux capabilities"),
            FlagEntry::new("--cgroup-parent", "Optional parent cgroup for the container"),
            FlagEntry::new("--cidfile", "Write the container ID to the file"),
            FlagEntry::new("--cpu-count", "CPU count (Windows only)"),
            FlagEntry::new("--cpu-percent", "CPU percent (Windows only)"),
            FlagEntry::new("--cpu-period", "Limit CPU CFS (Completely Fair Scheduler) period"),
            FlagEntry::new("--cpu-quota", "Limit CPU CFS (Completely Fair Scheduler) quota"),
            FlagEntry::new("--cpu-rt-period", ""),
            FlagEntry::new("--cpu-rt-runtime", ""),
            FlagEntry::new("--cpu-shares", "CPU shares (relative weight)"),
            FlagEntry::new("--cpus", ""),
            FlagEntry::new("--cpuset-cpus", "CPUs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--cpuset-mems", "MEMs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--detach", "Run container in background and print container ID"),
            FlagEntry::new("--detach-keys", "Override the key sequence for detaching a container"),
            FlagEntry::new("--device", "Add a host device to the container"),
            FlagEntry::new("--device-cgroup-rule", "Add a rule to the cgroup allowed devices list"),
            FlagEntry::new("--device-read-bps", "Limit read rate (bytes per second) from a device"),
            FlagEntry::new("--device-read-iops", "Limit read rate (IO per second) from a device"),
            FlagEntry::new("--device-write-bps", "Limit write rate (bytes per second) to a device"),
            FlagEntry::new("--device-write-iops", "Limit write rate (IO per second) to a device"),
            FlagEntry::new("--disable-content-trust", "Skip image verification"),
            FlagEntry::new("--dns", "Set custom DNS servers"),
            FlagEntry::new("--dns-opt", "Set DNS options"),
            FlagEntry::new("--dns-option", "Set DNS options"),
            FlagEntry::new("--dns-search", "Set custom DNS search domains"),
            FlagEntry::new("--domainname", "Container NIS domain name"),
            FlagEntry::new("--entrypoint", "Overwrite the default ENTRYPOINT of the image"),
            FlagEntry::new("--env", "Set environment variables"),
            FlagEntry::new("--env-file", "Read in a file of environment variables"),
            FlagEntry::new("--expose", "Expose a port or a range of ports"),
            FlagEntry::new("--gpus", ""),
            FlagEntry::new("--group-add", "Add additional groups to join"),
            FlagEntry::new("--health-cmd", "Command to run to check health"),
            FlagEntry::new("--health-interval", "Time between running the check (ms|s|m|h) (default 0s)"),
            FlagEntry::new("--health-retries", "Consecutive failures needed to report unhealthy"),
            FlagEntry::new("--health-start-period", ""),
            FlagEntry::new("--health-timeout", "Maximum time to allow one check to run (ms|s|m|h) (default 0s)"),
            FlagEntry::new("--help", "Print usage"),
            FlagEntry::new("--hostname", "Container host name"),
            FlagEntry::new("--init", ""),
            FlagEntry::new("--interactive", "Keep STDIN open even if not attached"),
            FlagEntry::new("--io-maxbandwidth", "Maximum IO bandwidth limit for the system drive (Windows only)"),
            FlagEntry::new("--io-maxiops", "Maximum IOps limit for the system drive (Windows only)"),
            FlagEntry::new("--ip", "IPv4 address (e.g., 172.30.100.104)"),
            FlagEntry::new("--ip6", "IPv6 address (e.g., 2001:db8::33)"),
            FlagEntry::new("--ipc", "IPC mode to use"),
            FlagEntry::new("--isolation", "Container isolation technology"),
            FlagEntry::new("--kernel-memory", "Kernel memory limit"),
            FlagEntry::new("--label", "Set meta data on a container"),
            FlagEntry::new("--label-file", "Read in a line delimited file of labels"),
            FlagEntry::new("--link", "Add link to another container"),
            FlagEntry::new("--link-local-ip", "Container IPv4/IPv6 link-local addresses"),
            FlagEntry::new("--log-driver", "Logging driver for the container"),
            FlagEntry::new("--log-opt", "Log driver options"),
            FlagEntry::new("--mac-address", "Container MAC address (e.g., 92:d0:c6:0a:29:33)"),
            FlagEntry::new("--memory", "Memory limit"),
            FlagEntry::new("--memory-reservation", "Memory soft limit"),
            FlagEntry::new("--memory-swap", "Swap limit equal to memory plus swap: ‘-1’ to enable unlimited swap"),
            FlagEntry::new("--memory-swappiness", "Tune container memory swappiness (0 to 100)"),
            FlagEntry::new("--mount", "Attach a filesystem mount to the container"),
            FlagEntry::new("--name", "Assign a name to the container"),
            FlagEntry::new("--net", "Connect a container to a network"),
            FlagEntry::new("--net-alias", "Add network-scoped alias for the container"),
            FlagEntry::new("--network", "Connect a container to a network"),
            FlagEntry::new("--network-alias", "Add network-scoped alias for the container"),
            FlagEntry::new("--no-healthcheck", "Disable any container-specified HEALTHCHECK"),
            FlagEntry::new("--oom-kill-disable", "Disable OOM Killer"),
            FlagEntry::new("--oom-score-adj", "Tune host’s OOM preferences (-1000 to 1000)"),
            FlagEntry::new("--pid", "PID namespace to use"),
            FlagEntry::new("--pids-limit", "Tune container pids limit (set -1 for unlimited)"),
            FlagEntry::new("--platform", ""),
            FlagEntry::new("--privileged", "Give extended privileges to this container"),
            FlagEntry::new("--publish", "Publish a container’s port(s) to the host"),
            FlagEntry::new("--publish-all", "Publish all exposed ports to random ports"),
            FlagEntry::new("--read-only", "Mount the container’s root filesystem as read only"),
            FlagEntry::new("--restart", "Restart policy to apply when a container exits"),
            FlagEntry::new("--rm", "Automatically remove the container when it exits"),
            FlagEntry::new("--runtime", "Runtime to use for this container"),
            FlagEntry::new("--security-opt", "Security Options"),
            FlagEntry::new("--shm-size", "Size of /dev/shm"),
            FlagEntry::new("--sig-proxy", "Proxy received signals to the process"),
            FlagEntry::new("--stop-signal", "Signal to stop a container"),
            FlagEntry::new("--stop-timeout", ""),
            FlagEntry::new("--storage-opt", "Storage driver options for the container"),
            FlagEntry::new("--sysctl", "Sysctl options"),
            FlagEntry::new("--tmpfs", "Mount a tmpfs directory"),
            FlagEntry::new("--tty", "Allocate a pseudo-TTY"),
            FlagEntry::new("--ulimit", "Ulimit options"),
            FlagEntry::new("--user", "Username or UID (format: &lt;name|uid&gt;[:&lt;group|gid&gt;])"),
            FlagEntry::new("--userns", "User namespace to use"),
            FlagEntry::new("--uts", "UTS namespace to use"),
            FlagEntry::new("--volume", "Bind mount a volume"),
            FlagEntry::new("--volume-driver", "Optional volume driver for the container"),
            FlagEntry::new("--volumes-from", "Mount volumes from the specified container(s)"),
            FlagEntry::new("--workdir", "Working directory inside the container"),
        ],
    ),
    (
        "save",
        &[
            FlagEntry::new("--output", "Write to a file, instead of STDOUT"),
        ],
    ),
    (
        "search",
        &[
            FlagEntry::new("--automated", ""),
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Pretty-print search using a Go template"),
            FlagEntry::new("--limit", "Max number of search results"),
            FlagEntry::new("--no-trunc", "Don’t truncate output"),
            FlagEntry::new("--stars", ""),
        ],
    ),
    (
        "stack",
        &[
            FlagEntry::new("--kubeconfig", ""),
            FlagEntry::new("--orchestrator", "Orchestrator to use (swarm|kubernetes|all)"),
        ],
    ),
    (
        "start",
        &[
            FlagEntry::new("--attach", "Attach STDOUT/STDERR and forward signals"),
            FlagEntry::new("--checkpoint", ""),
            FlagEntry::new("--checkpoint-dir", ""),
            FlagEntry::new("--detach-keys", "Override the key sequence for detaching a container"),
            FlagEntry::new("--interactive", "Attach container’s STDIN"),
        ],
    ),
    (
        "stats",
        &[
            FlagEntry::new("--all", "Show all containers (default shows just running)"),
            FlagEntry::new("--format", "Pretty-print images using a Go template"),
            FlagEntry::new("--no-stream", "Disable streaming stats and only pull the first result"),
            FlagEntry::new("--no-trunc", "Do not truncate output"),
        ],
    ),
    (
        "stop",
        &[
            FlagEntry::new("--time", "Seconds to wait for stop before killing it"),
        ],
    ),
    (
        "update",
        &[
            FlagEntry::new("--blkio-weight", "Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)"),
            FlagEntry::new("--cpu-period", "Limit CPU CFS (Completely Fair Scheduler) period"),
            FlagEntry::new("--cpu-quota", "Limit CPU CFS (Completely Fair Scheduler) quota"),
            FlagEntry::new("--cpu-rt-period", ""),
            FlagEntry::new("--cpu-rt-runtime", ""),
            FlagEntry::new("--cpu-shares", "CPU shares (relative weight)"),
            FlagEntry::new("--cpus", ""),
            FlagEntry::new("--cpuset-cpus", "CPUs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--cpuset-mems", "MEMs in which to allow execution (0-3, 0,1)"),
            FlagEntry::new("--kernel-memory", "Kernel memory limit"),
            FlagEntry::new("--memory", "Memory limit"),
            FlagEntry::new("--memory-reservation", "Memory soft limit"),
            FlagEntry::new("--memory-swap", "Swap limit equal to memory plus swap: ‘-1’ to enable unlimited swap"),
            FlagEntry::new("--pids-limit", ""),
            FlagEntry::new("--restart", "Restart policy to apply when a container exits"),
        ],
    ),
    (
        "version",
        &[
            FlagEntry::new("--format", "Format the output using the given Go template"),
            FlagEntry::new("--kubeconfig", ""),
        ],
    ),
    (
        "service",
        &[
            FlagEntry::new("create", "Create a new service"),
            FlagEntry::new("inspect", "Display detailed information on one or more services"),
            FlagEntry::new("logs", "Fetch the logs of a service or task"),
            FlagEntry::new("ls", "List services"),
            FlagEntry::new("ps", "List the tasks of one or more services"),
            FlagEntry::new("rm", "Remove one or more services"),
            FlagEntry::new("rollback", "Revert changes to a service’s configuration"),
            FlagEntry::new("scale", "Scale one or multiple replicated services"),
            FlagEntry::new("update", "Update a service"),
        ],
    ),
    (
        "service create",
        &[
            FlagEntry::new("--config", "Specify configurations to expose to the service"),
            FlagEntry::new("--constraint", "Placement constraints"),
            FlagEntry::new("--container-label", "Container labels"),
            FlagEntry::new("--credential-spec", "Credential spec for managed service account (Windows only)"),
            FlagEntry::new("--detach", "Exit immediately instead of waiting for the service to converge"),
            FlagEntry::new("--dns", "Set custom DNS servers"),
            FlagEntry::new("--dns-option", "Set DNS options"),
            FlagEntry::new("--dns-search", "Set custom DNS search domains"),
            FlagEntry::new("--endpoint-mode", "Endpoint mode (vip or dnsrr)"),
            FlagEntry::new("--entrypoint", "Overwrite the default ENTRYPOINT of the image"),
            FlagEntry::new("--env", "Set environment variables"),
            FlagEntry::new("--env-file", "Read in a file of environment variables"),
            FlagEntry::new("--generic-resource", "User defined resources"),
            FlagEntry::new("--group", "Set one or more supplementary user groups for the container"),
            FlagEntry::new("--health-cmd", "Command to run to check health"),
            FlagEntry::new("--health-interval", "Time between running the check (ms|s|m|h)"),
            FlagEntry::new("--health-retries", "Consecutive failures needed to report unhealthy"),
            FlagEntry::new("--health-start-period", "Start period for the container to initialize before counting retries towards unstable (ms|s|m|h)"),
            FlagEntry::new("--health-timeout", "Maximum time to allow one check to run (ms|s|m|h)"),
            FlagEntry::new("--host", "Set one or more custom host-to-IP mappings (host:ip)"),
            FlagEntry::new("--hostname", "Container hostname"),
            FlagEntry::new("--init", "Use an init inside each service container to forward signals and reap processes"),
            FlagEntry::new("--isolation", "Service container isolation mode"),
            FlagEntry::new("--label", "Service labels"),
            FlagEntry::new("--limit-cpu", "Limit CPUs"),
            FlagEntry::new("--limit-memory", "Limit Memory"),
            FlagEntry::new("--log-driver", "Logging driver for service"),
            FlagEntry::new("--log-opt", "Logging driver options"),
            FlagEntry::new("--mode", "Service mode (replicated or global)"),
            FlagEntry::new("--mount", "Attach a filesystem mount to the service"),
            FlagEntry::new("--name", "Service name"),
            FlagEntry::new("--network", "Network attachments"),
            FlagEntry::new("--no-healthcheck", "Disable any container-specified HEALTHCHECK"),
            FlagEntry::new("--no-resolve-image", "Do not query the registry to resolve image digest and supported platforms"),
            FlagEntry::new("--placement-pref", "Add a placement preference"),
            FlagEntry::new("--publish", "Publish a port as a node port"),
            FlagEntry::new("--quiet", "Suppress progress output"),
            FlagEntry::new("--read-only", "Mount the container’s root filesystem as read only"),
            FlagEntry::new("--replicas", "Number of tasks"),
            FlagEntry::new("--replicas-max-per-node", "Maximum number of tasks per node (default 0 = unlimited)"),
            FlagEntry::new("--reserve-cpu", "Reserve CPUs"),
            FlagEntry::new("--reserve-memory", "Reserve Memory"),
            FlagEntry::new("--restart-condition", "Restart when condition is met (“none”|”on-failure”|”any”) (default “any”)"),
            FlagEntry::new("--restart-delay", "Delay between restart attempts (ns|us|ms|s|m|h) (default 5s)"),
            FlagEntry::new("--restart-max-attempts", "Maximum number of restarts before giving up"),
            FlagEntry::new("--restart-window", "Window used to evaluate the restart policy (ns|us|ms|s|m|h)"),
            FlagEntry::new("--rollback-delay", "Delay between task rollbacks (ns|us|ms|s|m|h) (default 0s)"),
            FlagEntry::new("--rollback-failure-action", "Action on rollback failure (“pause”|”continue”) (default “pause”)"),
            FlagEntry::new("--rollback-max-failure-ratio", "Failure rate to tolerate during a rollback (default 0)"),
            FlagEntry::new("--rollback-monitor", "Duration after each task rollback to monitor for failure (ns|us|ms|s|m|h) (default 5s)"),
            FlagEntry::new("--rollback-order", "Rollback order (“start-first”|”stop-first”) (default “stop-first”)"),
            FlagEntry::new("--rollback-parallelism", "Maximum number of tasks rolled back simultaneously (0 to roll back all at once)"),
            FlagEntry::new("--secret", "Specify secrets to expose to the service"),
            FlagEntry::new("--stop-grace-period", "Time to wait before force killing a container (ns|us|ms|s|m|h) (default 10s)"),
            FlagEntry::new("--stop-signal", "Signal to stop the container"),
            FlagEntry::new("--sysctl", "Sysctl options"),
            FlagEntry::new("--tty", "Allocate a pseudo-TTY"),
            FlagEntry::new("--update-delay", "Delay between updates (ns|us|ms|s|m|h) (default 0s)"),
            FlagEntry::new("--update-failure-action", "Action on update failure (“pause”|”continue”|”rollback”) (default “pause”)"),
            FlagEntry::new("--update-max-failure-ratio", "Failure rate to tolerate during an update (default 0)"),
            FlagEntry::new("--update-monitor", "Duration after each task update to monitor for failure (ns|us|ms|s|m|h) (default 5s)"),
            FlagEntry::new("--update-order", "Update order (“start-first”|”stop-first”) (default “stop-first”)"),
            FlagEntry::new("--update-parallelism", "Maximum number of tasks updated simultaneously (0 to update all at once)"),
            FlagEntry::new("--user", "Username or UID (format: <name|uid>[:<group|gid>])"),
            FlagEntry::new("--with-registry-auth", "Send registry authentication details to swarm agents"),
            FlagEntry::new("--workdir", "Working directory inside the container"),
        ],
    ),
    (
        "service inspect",
        &[
            FlagEntry::new("--format", "Format the output using the given Go template"),
            FlagEntry::new("--pretty", "Print the information in a human friendly format"),
        ],
    ),
    (
        "service logs",
        &[
            FlagEntry::new("--details", "Show extra details provided to logs"),
            FlagEntry::new("--follow", "Follow log output"),
            FlagEntry::new("--no-resolve", "Do not map IDs to Names in output"),
            FlagEntry::new("--no-task-ids", "Do not include task IDs in output"),
            FlagEntry::new("--no-trunc", "Do not truncate output"),
            FlagEntry::new("--raw", "Do not neatly format logs"),
            FlagEntry::new("--since", "Show logs since timestamp (e.g. 2013-01-02T13:23:37) or relative (e.g. 42m for 42 minutes)"),
            FlagEntry::new("--tail", "Number of lines to show from the end of the logs"),
            FlagEntry::new("--timestamps", "Show timestamps"),
        ],
    ),
    (
        "service ls",
        &[
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Pretty-print services using a Go template"),
            FlagEntry::new("--quiet", "Only display IDs"),
        ],
    ),
    (
        "service ps",
        &[
            FlagEntry::new("--filter", "Filter output based on conditions provided"),
            FlagEntry::new("--format", "Pretty-print tasks using a Go template"),
            FlagEntry::new("--no-resolve", "Do not map IDs to Names"),
            FlagEntry::new("--no-trunc", "Do not truncate output"),
            FlagEntry::new("--quiet", "Only display task IDs"),
        ],
    ),
    (
        "service rollback",
        &[
            FlagEntry::new("--detach", "Exit immediately instead of waiting for the service to converge"),
            FlagEntry::new("--quiet", "Suppress progress output"),
        ],
    ),
    (
        "service scale",
        &[
            FlagEntry::new("--detach", "Exit immediately instead of waiting for the service to converge"),
        ],
    ),
    (
        "service update",
        &[
            FlagEntry::new("--args", "Service command args"),
            FlagEntry::new("--config-add", "Add or update a config file on a service"),
            FlagEntry::new("--config-rm", "Remove a configuration file"),
            FlagEntry::new("--constraint-add", "Add or update a placement constraint"),
            FlagEntry::new("--constraint-rm", "Remove a constraint"),
            FlagEntry::new("--container-label-add", "Add or update a container label"),
            FlagEntry::new("--container-label-rm", "Remove a container label by its key"),
            FlagEntry::new("--credential-spec", "Credential spec for managed service account (Windows only)"),
            FlagEntry::new("--detach", "Exit immediately instead of waiting for the service to converge"),
            FlagEntry::new("--dns-add", "Add or update a custom DNS server"),
            FlagEntry::new("--dns-option-add", "Add or update a DNS option"),
            FlagEntry::new("--dns-option-rm", "Remove a DNS option"),
            FlagEntry::new("--dns-rm", "Remove a custom DNS server"),
            FlagEntry::new("--dns-search-add", "Add or update a custom DNS search domain"),
            FlagEntry::new("--dns-search-rm", "Remove a DNS search domain"),
            FlagEntry::new("--endpoint-mode", "Endpoint mode (vip or dnsrr)"),
            FlagEntry::new("--entrypoint", "Overwrite the default ENTRYPOINT of the image"),
            FlagEntry::new("--env-add", "Add or update an environment variable"),
            FlagEntry::new("--env-rm", "Remove an environment variable"),
            FlagEntry::new("--force", "Force update even if no changes require it"),
            FlagEntry::new("--generic-resource-add", "Add a Generic resource"),
            FlagEntry::new("--generic-resource-rm", "Remove a Generic resource"),
            FlagEntry::new("--group-add", "Add an additional supplementary user group to the container"),
            FlagEntry::new("--group-rm", "Remove a previously added supplementary user group from the container"),
            FlagEntry::new("--health-cmd", "Command to run to check health"),
            FlagEntry::new("--health-interval", "Time between running the check (ms|s|m|h)"),
            FlagEntry::new("--health-retries", "Consecutive failures needed to report unhealthy"),
            FlagEntry::new("--health-start-period", "Start period for the container to initialize before counting retries towards unstable (ms|s|m|h)"),
            FlagEntry::new("--health-timeout", "Maximum time to allow one check to run (ms|s|m|h)"),
            FlagEntry::new("--host-add", "Add a custom host-to-IP mapping (host:ip)"),
            FlagEntry::new("--host-rm", "Remove a custom host-to-IP mapping (host:ip)"),
            FlagEntry::new("--hostname", "Container hostname"),
            FlagEntry::new("--image", "Service image tag"),
            FlagEntry::new("--init", "Use an init inside each service container to forward signals and reap processes"),
            FlagEntry::new("--isolation", "Service container isolation mode"),
            FlagEntry::new("--label-add", "Add or update a service label"),
            FlagEntry::new("--label-rm", "Remove a label by its key"),
            FlagEntry::new("--limit-cpu", "Limit CPUs"),
            FlagEntry::new("--limit-memory", "Limit Memory"),
            FlagEntry::new("--log-driver", "Logging driver for service"),
            FlagEntry::new("--log-opt", "Logging driver options"),
            FlagEntry::new("--mount-add", "Add or update a mount on a service"),
            FlagEntry::new("--mount-rm", "Remove a mount by its target path"),
            FlagEntry::new("--network-add", "Add a network"),
            FlagEntry::new("--network-rm", "Remove a network"),
            FlagEntry::new("--no-healthcheck", "Disable any container-specified HEALTHCHECK"),
            FlagEntry::new("--no-resolve-image", "Do not query the registry to resolve image digest and supported platforms"),
            FlagEntry::new("--placement-pref-add", "Add a placement preference"),
            FlagEntry::new("--placement-pref-rm", "Remove a placement preference"),
            FlagEntry::new("--publish-add", "Add or update a published port"),
            FlagEntry::new("--publish-rm", "Remove a published port by its target port"),
            FlagEntry::new("--quiet", "Suppress progress output"),
            FlagEntry::new("--read-only", "Mount the container’s root filesystem as read only"),
            FlagEntry::new("--replicas", "Number of tasks"),
            FlagEntry::new("--replicas-max-per-node", "Maximum number of tasks per node (default 0 = unlimited)"),
            FlagEntry::new("--reserve-cpu", "Reserve CPUs"),
            FlagEntry::new("--reserve-memory", "Reserve Memory"),
            FlagEntry::new("--restart-condition", "Restart when condition is met (“none”|”on-failure”|”any”)"),
            FlagEntry::new("--restart-delay", "Delay between restart attempts (ns|us|ms|s|m|h)"),
            FlagEntry::new("--restart-max-attempts", "Maximum number of restarts before giving up"),
            FlagEntry::new("--restart-window", "Window used to evaluate the restart policy (ns|us|ms|s|m|h)"),
            FlagEntry::new("--rollback", "Rollback to previous specification"),
            FlagEntry::new("--rollback-delay", "Delay between task rollbacks (ns|us|ms|s|m|h)"),
            FlagEntry::new("--rollback-failure-action", "Action on rollback failure (“pause”|”continue”)"),
            FlagEntry::new("--rollback-max-failure-ratio", "Failure rate to tolerate during a rollback"),
            FlagEntry::new("--rollback-monitor", "Duration after each task rollback to monitor for failure (ns|us|ms|s|m|h)"),
            FlagEntry::new("--rollback-order", "Rollback order (“start-first”|”stop-first”)"),
            FlagEntry::new("--rollback-parallelism", "Maximum number of tasks rolled back simultaneously (0 to roll back all at once)"),
            FlagEntry::new("--secret-add", "Add or update a secret on a service"),
            FlagEntry::new("--secret-rm", "Remove a secret"),
            FlagEntry::new("--stop-grace-period", "Time to wait before force killing a container (ns|us|ms|s|m|h)"),
            FlagEntry::new("--stop-signal", "Signal to stop the container"),
            FlagEntry::new("--sysctl-add", "Add or update a Sysctl option"),
            FlagEntry::new("--sysctl-rm", "Remove a Sysctl option"),
            FlagEntry::new("--tty", "Allocate a pseudo-TTY"),
            FlagEntry::new("--update-delay", "Delay between updates (ns|us|ms|s|m|h)"),
            FlagEntry::new("--update-failure-action", "Action on update failure (“pause”|”continue”|”rollback”)"),
            FlagEntry::new("--update-max-failure-ratio", "Failure rate to tolerate during an update"),
            FlagEntry::new("--update-monitor", "Duration after each task update to monitor for failure (ns|us|ms|s|m|h)"),
            FlagEntry::new("--update-order", "Update order (“start-first”|”stop-first”)"),
            FlagEntry::new("--update-parallelism", "Maximum number of tasks updated simultaneously (0 to update all at once)"),
            FlagEntry::new("--user", "Username or UID (format: <name|uid>[:<group|gid>])"),
            FlagEntry::new("--with-registry-auth", "Send registry authentication details to swarm agents"),
            FlagEntry::new("--workdir", "Working directory inside the container"),
        ],
    ),
];
